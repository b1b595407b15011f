/// Limits applied by the converter around parsing and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Longest accepted input, counted in characters (default: 10 000).
    pub max_input_len: usize,
    /// Longest result handed back, counted in characters (default: 1 MiB).
    ///
    /// Text output grows much faster than its input: every thousands group
    /// past decillion repeats the word "decillion", so a maximal decimal
    /// input renders to several megabytes of words.
    pub max_output_len: usize,
}

// Big-integer parsing is linear in the input, so a length cap bounds memory too.
pub const DEFAULT_MAX_INPUT_LEN: usize = 10_000;
pub const DEFAULT_MAX_OUTPUT_LEN: usize = 1 << 20;

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_output_len: DEFAULT_MAX_OUTPUT_LEN,
        }
    }
}

impl ConverterConfig {
    pub fn with_max_input_len(max_input_len: usize) -> Self {
        Self {
            max_input_len,
            ..Self::default()
        }
    }

    pub fn max_output_len(mut self, max_output_len: usize) -> Self {
        self.max_output_len = max_output_len;
        self
    }
}
