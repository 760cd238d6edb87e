#![cfg(test)]

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// Increments a shared counter when dropped, so that tests can check that a collection released
/// every element it owned.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(counter: &Rc<RefCell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
