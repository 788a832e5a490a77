//! This file provides some numeric helpers
//! shared by the encoder and the transformers.
use serde::Serializer;


/// Cast `value` to single precision and back.
/// The fitted estimators compare features in `f32`,
/// so a split threshold is only meaningful after this round trip.
#[inline(always)]
pub fn to_split_value(value: f64) -> f64 {
    (value as f32) as f64
}


/// Returns the index of the maximal element of `values`.
/// Ties resolve to the lowest index.
/// `NaN`s are never chosen unless every element is `NaN`.
#[inline]
pub fn index_of_max(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] || (values[best].is_nan() && !v.is_nan()) {
            best = i;
        }
    }
    best
}


/// Returns `true` if `value` has no fractional part
/// and fits into an `i64`.
#[inline(always)]
pub fn is_integral(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && value.abs() < (i64::MAX as f64)
}


/// Serialize a count as an integer whenever it is exactly integral.
pub(crate) fn serialize_narrow<S>(value: &f64, serializer: S)
    -> Result<S::Ok, S::Error>
    where S: Serializer,
{
    if is_integral(*value) {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}


/// Same as `serialize_narrow` for optional counts.
pub(crate) fn serialize_narrow_opt<S>(value: &Option<f64>, serializer: S)
    -> Result<S::Ok, S::Error>
    where S: Serializer,
{
    match value {
        Some(v) => serialize_narrow(v, serializer),
        None => serializer.serialize_none(),
    }
}


/// Render a JSON scalar in its canonical text form.
/// Strings are taken verbatim, integral numbers lose their fraction.
/// `null` has no text form.
/// Arrays and objects fall back to their JSON text.
pub fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value as Json;
    match value {
        Json::Null => None,
        Json::Bool(b) => Some(b.to_string()),
        Json::String(s) => Some(s.clone()),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if is_integral(f) {
                        (f as i64).to_string()
                    } else {
                        f.to_string()
                    }
                })
            }
        },
        other => Some(other.to_string()),
    }
}
