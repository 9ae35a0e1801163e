//! In-place ascending sort for loot piles.

/// Insertion sort, ascending. Fine for the small sequences this crate
/// handles; stability is not part of the contract since equal-key items
/// are interchangeable.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::Item;

    #[test]
    fn test_sorts_items_by_combined_bonus() {
        // Combined totals: 12, 5, 18, 5, 9
        let mut items = vec![
            Item::new("Sword", 7, 5),
            Item::new("Ring", 2, 3),
            Item::new("Shield", 9, 9),
            Item::new("Amulet", 1, 4),
            Item::new("Sword", 4, 5),
        ];

        insertion_sort(&mut items);

        let totals: Vec<u32> = items.iter().map(Item::combined_bonus).collect();
        assert_eq!(totals, vec![5, 5, 9, 12, 18]);
    }

    #[test]
    fn test_sorts_integers() {
        let mut values = vec![5, 1, 4, 2, 3];
        insertion_sort(&mut values);
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: Vec<u32> = vec![];
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        insertion_sort(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_already_sorted_is_unchanged() {
        let mut values = vec![1, 2, 3, 4];
        insertion_sort(&mut values);
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut values = vec![9, 7, 5, 3, 1];
        insertion_sort(&mut values);
        assert_eq!(values, vec![1, 3, 5, 7, 9]);
    }
}
