//! Bounded history trimming.

/// Default maximum history length.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Trim a history to at most `max_len` elements.
///
/// FIFO eviction by count: within bound the input comes back unchanged,
/// otherwise the last `max_len` elements survive (oldest dropped) with
/// their order preserved.
pub fn trim_history<T>(mut items: Vec<T>, max_len: usize) -> Vec<T> {
    if items.len() > max_len {
        items.drain(..items.len() - max_len);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_bound_is_unchanged() {
        let items: Vec<u32> = (1..=50).collect();
        assert_eq!(trim_history(items.clone(), DEFAULT_HISTORY_LIMIT), items);
        assert_eq!(trim_history(Vec::<u32>::new(), DEFAULT_HISTORY_LIMIT), Vec::<u32>::new());
    }

    #[test]
    fn test_oldest_elements_are_dropped() {
        let items: Vec<u32> = (1..=60).collect();
        let trimmed = trim_history(items, DEFAULT_HISTORY_LIMIT);
        let expected: Vec<u32> = (11..=60).collect();
        assert_eq!(trimmed, expected);
    }

    #[test]
    fn test_zero_length_bound() {
        assert_eq!(trim_history(vec![1, 2, 3], 0), Vec::<i32>::new());
    }
}
