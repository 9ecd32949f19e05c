//! List Utilities
//!
//! Ordering helpers for the board's columns and the cards inside them.

use crate::models::{Board, BoardList, Card};

/// Lists in display order
pub fn sorted_lists(board: &Board) -> Vec<BoardList> {
    let mut lists = board.lists.clone();
    lists.sort_by_key(|l| l.order);
    lists
}

/// Cards of one list in display order
pub fn cards_for_list(cards: &[Card], list_id: u32) -> Vec<Card> {
    let mut result: Vec<Card> = cards.iter()
        .filter(|c| c.list_id == list_id)
        .cloned()
        .collect();
    result.sort_by_key(|c| c.order);
    result
}

/// Renumber `order` as 0..n for the cards of one list, keeping their relative order
fn renumber(cards: &mut [Card], list_id: u32) {
    let mut ids: Vec<(i32, u32)> = cards.iter()
        .filter(|c| c.list_id == list_id)
        .map(|c| (c.order, c.id))
        .collect();
    ids.sort();
    for (position, (_, id)) in ids.into_iter().enumerate() {
        if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
            card.order = position as i32;
        }
    }
}

/// Move a card to the drop slot `position` of `to_list`.
/// Slots index the list as displayed, the moved card included; out of range clamps to the end.
/// Returns false if the card is unknown.
pub fn move_card(cards: &mut [Card], card_id: u32, to_list: u32, position: usize) -> bool {
    let Some(from_list) = cards.iter().find(|c| c.id == card_id).map(|c| c.list_id) else {
        return false;
    };

    let displayed: Vec<u32> = cards_for_list(cards, to_list).into_iter().map(|c| c.id).collect();
    let mut position = position;
    if let Some(current) = displayed.iter().position(|id| *id == card_id) {
        if current < position {
            position -= 1;
        }
    }
    let mut target: Vec<u32> = displayed.into_iter().filter(|id| *id != card_id).collect();
    let position = position.min(target.len());
    target.insert(position, card_id);

    for (order, id) in target.iter().enumerate() {
        if let Some(card) = cards.iter_mut().find(|c| c.id == *id) {
            card.list_id = to_list;
            card.order = order as i32;
        }
    }
    if from_list != to_list {
        renumber(cards, from_list);
    }
    true
}

/// Replace a card by id. Returns false if the card is unknown.
pub fn replace_card(cards: &mut [Card], updated: Card) -> bool {
    match cards.iter_mut().find(|c| c.id == updated.id) {
        Some(card) => {
            *card = updated;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(id: u32, list_id: u32, order: i32) -> Card {
        Card {
            id,
            board_id: 1,
            list_id,
            order,
            content: format!("Card {}", id),
            due_date: None,
            archived: false,
            label_ids: vec![],
            user_ids: vec![],
        }
    }

    fn ids(cards: &[Card], list_id: u32) -> Vec<u32> {
        cards_for_list(cards, list_id).iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_cards_for_list() {
        let cards = vec![
            make_card(1, 1, 2),
            make_card(2, 2, 0),
            make_card(3, 1, 0),
            make_card(4, 1, 1),
        ];
        assert_eq!(ids(&cards, 1), vec![3, 4, 1]);
        assert_eq!(ids(&cards, 2), vec![2]);
        assert!(ids(&cards, 9).is_empty());
    }

    #[test]
    fn test_sorted_lists() {
        let board = Board {
            lists: vec![
                BoardList { id: 1, board_id: 1, name: "Done".into(), order: 2 },
                BoardList { id: 2, board_id: 1, name: "Todo".into(), order: 0 },
                BoardList { id: 3, board_id: 1, name: "Doing".into(), order: 1 },
            ],
            ..Default::default()
        };
        let names: Vec<String> = sorted_lists(&board).into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Todo", "Doing", "Done"]);
    }

    #[test]
    fn test_move_within_list() {
        let mut cards = vec![make_card(1, 1, 0), make_card(2, 1, 1), make_card(3, 1, 2)];
        assert!(move_card(&mut cards, 3, 1, 0));
        assert_eq!(ids(&cards, 1), vec![3, 1, 2]);
        let orders: Vec<i32> = cards_for_list(&cards, 1).iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_move_down_within_list() {
        let mut cards = vec![make_card(1, 1, 0), make_card(2, 1, 1), make_card(3, 1, 2)];
        // Slot right below the card itself leaves it in place
        assert!(move_card(&mut cards, 1, 1, 1));
        assert_eq!(ids(&cards, 1), vec![1, 2, 3]);
        // Slot after the last card
        assert!(move_card(&mut cards, 1, 1, 3));
        assert_eq!(ids(&cards, 1), vec![2, 3, 1]);
    }

    #[test]
    fn test_move_across_lists() {
        let mut cards = vec![
            make_card(1, 1, 0),
            make_card(2, 1, 1),
            make_card(3, 2, 0),
        ];
        assert!(move_card(&mut cards, 1, 2, 1));
        assert_eq!(ids(&cards, 1), vec![2]);
        assert_eq!(ids(&cards, 2), vec![3, 1]);
        // Source list is renumbered
        assert_eq!(cards_for_list(&cards, 1)[0].order, 0);
    }

    #[test]
    fn test_move_clamps_position() {
        let mut cards = vec![make_card(1, 1, 0), make_card(2, 2, 0)];
        assert!(move_card(&mut cards, 1, 2, 99));
        assert_eq!(ids(&cards, 2), vec![2, 1]);
    }

    #[test]
    fn test_move_into_empty_list() {
        let mut cards = vec![make_card(1, 1, 0)];
        assert!(move_card(&mut cards, 1, 5, 0));
        assert_eq!(ids(&cards, 5), vec![1]);
        assert!(ids(&cards, 1).is_empty());
    }

    #[test]
    fn test_move_unknown_card() {
        let mut cards = vec![make_card(1, 1, 0)];
        assert!(!move_card(&mut cards, 42, 1, 0));
        assert_eq!(cards[0].order, 0);
    }

    #[test]
    fn test_replace_card() {
        let mut cards = vec![make_card(1, 1, 0)];
        let edited = Card { content: "Edited".into(), ..make_card(1, 1, 0) };
        assert!(replace_card(&mut cards, edited));
        assert_eq!(cards[0].content, "Edited");
        assert!(!replace_card(&mut cards, make_card(2, 1, 0)));
    }
}
