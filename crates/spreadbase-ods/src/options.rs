//! ODS codec options

/// Options for encoding and decoding ODS documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OdsOptions {
    /// Indent content.xml when encoding
    pub prettify: bool,
    /// Decode numbers with a fractional part as exact decimals instead of floats
    pub floats_as_bigdecimal: bool,
}

impl OdsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prettify(mut self, prettify: bool) -> Self {
        self.prettify = prettify;
        self
    }

    pub fn with_floats_as_bigdecimal(mut self, floats_as_bigdecimal: bool) -> Self {
        self.floats_as_bigdecimal = floats_as_bigdecimal;
        self
    }
}
