//! Aggregate codec holder.

use super::{BinaryValueCodec, JsonValueCodec};

/// One codec instance per supported format.
pub struct Codecs {
    pub json: JsonValueCodec,
    pub binary: BinaryValueCodec,
}

impl Default for Codecs {
    fn default() -> Self {
        Self::new()
    }
}

impl Codecs {
    pub fn new() -> Self {
        Self {
            json: JsonValueCodec::new(),
            binary: BinaryValueCodec::new(),
        }
    }
}
