//! Focus reconciliation and wrap-around movement over the current screen.

/// Focus for a freshly built screen: the first item when one exists. A screen
/// the renderer cannot seat focus on is "no focus", never an error.
pub fn first_focus(len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(0)
    }
}

/// Move focus down one item, wrapping past the end. An unset focus lands on
/// the first item.
pub fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(index) if index + 1 < len => index + 1,
        _ => 0,
    })
}

/// Move focus up one item, wrapping past the start. An unset focus lands on
/// the last item.
pub fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(index) if index > 0 && index < len => index - 1,
        _ => len - 1,
    })
}
