use tree_wire::Grammar;

/// Configuration for a [`TreeDecoder`](crate::TreeDecoder).
///
/// The default is the strict grammar, which is what the `tree_to_text`
/// binary always uses. Library callers that need to read records with a
/// non-`tree` header token or symbolic permissions can opt into
/// [`Grammar::Permissive`].
///
/// ```rust
/// use tree_decoder::{DecoderConfig, Grammar};
///
/// let config = DecoderConfig { grammar: Grammar::Permissive };
/// assert_ne!(config, DecoderConfig::default());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Field grammar used to validate header, size and permissions bytes.
    pub grammar: Grammar,
}
