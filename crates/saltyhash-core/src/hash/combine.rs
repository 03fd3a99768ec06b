//! Salt/input combination.

use std::borrow::Cow;

use saltyhash_types::role::SaltMode;

/// Merge `salt` into `input` according to `mode`.
///
/// Never touches the caller's buffers; pass-through borrows the input.
pub fn combine<'a>(input: &'a [u8], salt: &[u8], mode: SaltMode) -> Cow<'a, [u8]> {
    match mode {
        SaltMode::Append => {
            let mut combined = Vec::with_capacity(input.len() + salt.len());
            combined.extend_from_slice(input);
            combined.extend_from_slice(salt);
            Cow::Owned(combined)
        }
        SaltMode::Prepend => {
            let mut combined = Vec::with_capacity(salt.len() + input.len());
            combined.extend_from_slice(salt);
            combined.extend_from_slice(input);
            Cow::Owned(combined)
        }
        SaltMode::Passthrough => Cow::Borrowed(input),
    }
}
