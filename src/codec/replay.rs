use super::CodecError;

/// The outcome of replaying an encoded stream into a collection.
///
/// Decoding stops at the first record that fails, but everything before it has already been
/// inserted, so the count is kept alongside the error rather than replaced by it.
#[derive(Debug, Default)]
pub struct Replay {
    /// The number of records inserted.
    pub count: usize,
    /// The error that stopped the replay early, if any.
    pub error: Option<CodecError>,
}

impl Replay {
    /// Runs `replay` with a counter for it to increment after each insertion, capturing the
    /// final count along with any error it returns.
    pub fn run<F>(replay: F) -> Replay
    where
        F: FnOnce(&mut usize) -> Result<(), CodecError>,
    {
        let mut count = 0;
        let error = replay(&mut count).err();
        Replay { count, error }
    }

    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the count, or the error if there was one.
    pub fn into_result(self) -> Result<usize, CodecError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.count),
        }
    }
}
