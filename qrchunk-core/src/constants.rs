//! Constants and limits for the chunk/symbol codec

/// First character of the text-safe alphabet (digit value 0)
pub const ALPHABET_FIRST: u8 = b'!';

/// Last character of the text-safe alphabet (digit value 84)
pub const ALPHABET_LAST: u8 = b'u';

/// Shorthand character for a full all-zero input group
pub const ZERO_GROUP: u8 = b'z';

/// Number of input bytes per encoding group
pub const GROUP_BYTES: usize = 4;

/// Number of output characters per full encoding group
pub const GROUP_CHARS: usize = 5;

/// Maximum payload text length a single symbol can carry.
///
/// Byte-mode capacity of the largest symbol version (40) at the default
/// medium error-correction level. Longer text cannot be rendered.
pub const MAX_SYMBOL_TEXT_LEN: usize = 2331;

/// Largest chunk guaranteed to fit in one symbol.
///
/// Four input bytes expand to five payload characters, so this is the
/// floor of the capacity under the 5/4 expansion ratio. Chunks containing
/// all-zero groups compress below the ratio and may fit above this bound;
/// the pipelines check the actual encoded length, not this constant.
pub const MAX_CHUNK_SIZE: usize = (MAX_SYMBOL_TEXT_LEN / GROUP_CHARS) * GROUP_BYTES;

/// Default side length of one symbol module, in pixels
pub const DEFAULT_MODULE_PIXELS: u32 = 8;

/// File extension of rendered symbol images (lossless raster)
pub const IMAGE_EXTENSION: &str = "png";
