//! Text shortening for cells and headers that are too narrow.

use trellis_core::{Font, TextMeasure};

/// Marker appended to shortened text.
pub const ELLIPSIS: &str = "...";

/// Shorten `text` so it fits in `available` pixels.
///
/// Text that already fits is returned unchanged. Otherwise the longest
/// character prefix such that `prefix + "..."` fits is returned, found by
/// binary search over the prefix length. If even the ellipsis does not fit
/// the result is empty. Widths must grow monotonically with prefix length.
#[must_use]
pub fn shorten(text: &str, available: f32, font: &Font, measure: &dyn TextMeasure) -> String {
    let available = available.max(0.0);
    if measure.text_width(text, font) <= available {
        return text.to_string();
    }
    if measure.text_width(ELLIPSIS, font) > available {
        return String::new();
    }

    let starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let prefix_end = |chars: usize| starts.get(chars).copied().unwrap_or(text.len());

    // `low` always fits; `high` is the largest candidate not yet ruled out.
    let mut low = 0;
    let mut high = starts.len();
    while low < high {
        let mid = (low + high + 1) / 2;
        let candidate = format!("{}{ELLIPSIS}", &text[..prefix_end(mid)]);
        if measure.text_width(&candidate, font) <= available {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    format!("{}{ELLIPSIS}", &text[..prefix_end(low)])
}
