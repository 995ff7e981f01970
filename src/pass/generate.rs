//! Password generation.

use tracing::debug;
use zeroize::Zeroizing;

use super::{GenerateError, GenerationRequest, charset};
use crate::entropy::EntropySource;

/// Generate one password for `request`, drawing every random choice from
/// `source`.
///
/// One character of each selected class is seeded first, in priority order
/// (lowercase, uppercase, digits, symbols). When `length` is smaller than the
/// number of selected classes only the first `length` of them get a seed; the
/// rest still contribute to the pool. The remainder is filled from the full
/// pool and the whole buffer is Fisher-Yates shuffled.
///
/// Validation runs before any draw, so a rejected request consumes nothing.
pub fn generate<S>(request: &GenerationRequest, source: &mut S) -> Result<String, GenerateError>
where
    S: EntropySource + ?Sized,
{
    validate(request)?;

    let length = request.length;
    debug!(
        length,
        classes = request.class_count(),
        pool = charset::size(request),
        source = source.name(),
        "generating password"
    );

    let pool = charset::build(request);
    let mut buf = Zeroizing::new(Vec::with_capacity(length));

    for class in request.selected().take(length) {
        buf.push(random_byte(class.alphabet(), source)?);
    }

    let remaining = length - buf.len();
    for _ in 0..remaining {
        buf.push(random_byte(&pool, source)?);
    }

    shuffle(&mut buf, source)?;

    Ok(buf.iter().map(|&b| b as char).collect())
}

/// Input checks, in order: length first, then class selection.
pub fn validate(request: &GenerationRequest) -> Result<(), GenerateError> {
    if request.length == 0 {
        return Err(GenerateError::InvalidLength);
    }
    if request.class_count() == 0 {
        return Err(GenerateError::NoClassSelected);
    }
    Ok(())
}

#[inline]
fn random_byte<S>(chars: &[u8], source: &mut S) -> Result<u8, GenerateError>
where
    S: EntropySource + ?Sized,
{
    Ok(chars[source.draw(chars.len())?])
}

#[inline]
fn shuffle<S>(chars: &mut [u8], source: &mut S) -> Result<(), GenerateError>
where
    S: EntropySource + ?Sized,
{
    for i in (1..chars.len()).rev() {
        let j = source.draw(i + 1)?;
        chars.swap(i, j);
    }
    Ok(())
}
