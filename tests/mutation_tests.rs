use slotvec::{SlotVec, SlotVecError};

#[test]
fn test_insert_at_front_middle_and_end() {
    let mut slot_vec = SlotVec::from_slice(&[2, 4]).unwrap();

    slot_vec.insert(0, 1).unwrap();
    slot_vec.insert(2, 3).unwrap();
    slot_vec.insert(4, 5).unwrap();

    assert_eq!(slot_vec.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_insert_into_empty() {
    let mut slot_vec = SlotVec::new().unwrap();
    slot_vec.insert(0, 'a').unwrap();
    assert_eq!(slot_vec.as_slice(), &['a']);
}

#[test]
fn test_insert_triggers_growth() {
    let mut slot_vec = SlotVec::from_slice(&[0u16; 8]).unwrap();
    assert_eq!(slot_vec.capacity(), 8);

    slot_vec.insert(3, 7).unwrap();

    assert_eq!(slot_vec.capacity(), 16);
    assert_eq!(slot_vec.len(), 9);
    assert_eq!(slot_vec.get(3), Some(&7));
    assert_eq!(slot_vec.get(8), Some(&0));
}

#[test]
fn test_insert_past_end_rejected() {
    let mut slot_vec = SlotVec::from_slice(&[1, 2]).unwrap();

    assert_eq!(
        slot_vec.insert(3, 9),
        Err(SlotVecError::InsertOutOfBounds {
            index: 3,
            length: 2
        })
    );
    assert_eq!(slot_vec.as_slice(), &[1, 2]);
}

#[test]
fn test_insert_then_remove_restores_contents() {
    let original = [5u8, 6, 7, 8];
    for index in 0..=original.len() {
        let mut slot_vec = SlotVec::from_slice(&original).unwrap();

        slot_vec.insert(index, 42).unwrap();
        assert_eq!(slot_vec.remove(index), Ok(42));

        assert_eq!(slot_vec.as_slice(), &original);
    }
}

#[test]
fn test_set_overwrites_in_place() {
    let mut slot_vec = SlotVec::from_slice(&[1, 2, 3]).unwrap();

    slot_vec.set(1, 20).unwrap();

    assert_eq!(slot_vec.as_slice(), &[1, 20, 3]);
    assert_eq!(slot_vec.len(), 3);
    assert_eq!(slot_vec.capacity(), 8);
}

#[test]
fn test_set_out_of_bounds() {
    let mut slot_vec = SlotVec::from_slice(&[1, 2, 3]).unwrap();

    assert_eq!(
        slot_vec.set(3, 0),
        Err(SlotVecError::IndexOutOfBounds {
            index: 3,
            length: 3
        })
    );
    assert_eq!(slot_vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_get_mut_modifies_slot() {
    let mut slot_vec = SlotVec::from_slice(&[1, 2, 3]).unwrap();

    if let Some(slot) = slot_vec.get_mut(2) {
        *slot *= 10;
    }

    assert_eq!(slot_vec.as_slice(), &[1, 2, 30]);
    assert!(slot_vec.get_mut(3).is_none());
}

#[test]
fn test_remove_shifts_tail_left() {
    let mut slot_vec = SlotVec::from_slice(&['a', 'b', 'c', 'd']).unwrap();

    assert_eq!(slot_vec.remove(1), Ok('b'));
    assert_eq!(slot_vec.as_slice(), &['a', 'c', 'd']);

    assert_eq!(slot_vec.remove(2), Ok('d'));
    assert_eq!(slot_vec.as_slice(), &['a', 'c']);
}

#[test]
fn test_remove_out_of_bounds() {
    let mut slot_vec = SlotVec::<u8>::new().unwrap();

    assert_eq!(
        slot_vec.remove(0),
        Err(SlotVecError::IndexOutOfBounds {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn test_remove_value_removes_first_match_only() {
    let mut slot_vec = SlotVec::from_slice(&[3, 1, 3, 2, 3]).unwrap();

    assert_eq!(slot_vec.remove_value(&3), Ok(3));
    assert_eq!(slot_vec.as_slice(), &[1, 3, 2, 3]);
    assert_eq!(slot_vec.index_of(&3), Some(1));

    slot_vec.remove_value(&3).unwrap();
    slot_vec.remove_value(&3).unwrap();

    assert!(!slot_vec.contains(&3));
    assert_eq!(slot_vec.as_slice(), &[1, 2]);
}

#[test]
fn test_remove_value_not_found() {
    let mut slot_vec = SlotVec::from_slice(&[1, 2]).unwrap();

    assert_eq!(slot_vec.remove_value(&7), Err(SlotVecError::ValueNotFound));
    assert_eq!(slot_vec.as_slice(), &[1, 2]);
}

#[test]
fn test_remove_first_by_predicate() {
    let mut slot_vec = SlotVec::from_slice(&[(1, 'a'), (2, 'b'), (3, 'b')]).unwrap();

    assert_eq!(slot_vec.remove_first_by(|&(_, tag)| tag == 'b'), Ok((2, 'b')));
    assert_eq!(slot_vec.as_slice(), &[(1, 'a'), (3, 'b')]);
    assert_eq!(
        slot_vec.remove_first_by(|&(n, _)| n > 10),
        Err(SlotVecError::ValueNotFound)
    );
}

#[test]
fn test_add_all_appends_in_order() {
    let mut slot_vec = SlotVec::from_slice(&[1, 2]).unwrap();

    slot_vec.add_all(&[3, 4, 5]).unwrap();
    slot_vec.add_all(&[]).unwrap();

    assert_eq!(slot_vec.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_add_all_grows_like_repeated_push() {
    let values: Vec<u32> = (0..37).collect();

    let mut bulk = SlotVec::new().unwrap();
    bulk.add_all(&values).unwrap();

    let mut one_by_one = SlotVec::new().unwrap();
    for value in &values {
        one_by_one.push(*value).unwrap();
    }

    assert_eq!(bulk.capacity(), 64);
    assert_eq!(bulk.capacity(), one_by_one.capacity());
    assert_eq!(bulk.as_slice(), one_by_one.as_slice());
}
