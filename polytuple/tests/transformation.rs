use polytuple::{position::*, prelude::*};

#[test]
fn insertion_into_wide_tuples() {
    let ennead = Tuple9::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
    let decade = ennead.add_at1(("Pepito",));
    assert_eq!(
        decade,
        Tuple10::new(1, "Pepito", 2, 3, 4, 5, 6, 7, 8, 9)
    );
    assert_eq!(decade.to_string(), "[1, Pepito, 2, 3, 4, 5, 6, 7, 8, 9]");

    let sextet = Tuple6::new(1.0, 2, "3.0", 4_u8, '5', true);
    let septet = sextet.add_at3(("Perico",));
    assert_eq!(septet, Tuple7::new(1.0, 2, "3.0", "Perico", 4_u8, '5', true));
    assert_eq!(septet.remove_at3(), sextet);
}

#[test]
fn splicing_fills_to_the_largest_arity() {
    let pair = Tuple2::new('a', 'z');
    let octet = Tuple8::new(1, 2, 3, 4, 5, 6, 7, 8);
    assert_eq!(
        pair.add_at1(octet),
        Tuple10::new('a', 1, 2, 3, 4, 5, 6, 7, 8, 'z')
    );
    assert_eq!(
        Tuple1::new(0).add_at0(Tuple9::new(1, 2, 3, 4, 5, 6, 7, 8, 9)),
        Tuple10::new(1, 2, 3, 4, 5, 6, 7, 8, 9, 0)
    );
    assert_eq!(
        Tuple5::new(1, 2, 3, 4, 5).add((6, 7, 8, 9, 10)),
        Tuple10::new(1, 2, 3, 4, 5, 6, 7, 8, 9, 10)
    );
}

#[test]
fn insertion_then_removal_restores_a_triplet() {
    let triplet = Tuple3::new("a", 2, 'c');

    assert_eq!(triplet.add_at0((0.5,)).remove_at0(), triplet);
    assert_eq!(triplet.add_at1((0.5,)).remove_at1(), triplet);
    assert_eq!(triplet.add_at2((0.5,)).remove_at2(), triplet);
    assert_eq!(triplet.add_at3((0.5,)).remove_at3(), triplet);
}

#[test]
fn removal_at_every_position_of_a_decade() {
    let decade = Tuple10::new(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
    assert_eq!(decade.remove_at0(), Tuple9::new(1, 2, 3, 4, 5, 6, 7, 8, 9));
    assert_eq!(decade.remove_at4(), Tuple9::new(0, 1, 2, 3, 5, 6, 7, 8, 9));
    assert_eq!(decade.remove_at9(), Tuple9::new(0, 1, 2, 3, 4, 5, 6, 7, 8));
    assert_eq!(Tuple2::new('x', 'y').remove_at1(), Tuple1::new('x'));
}

#[test]
fn replacement_keeps_other_positions() {
    let quintet = Tuple5::new(1, 2, 3, 4, 5);
    let replaced = quintet.set_at2("three");
    assert_eq!(replaced, Tuple5::new(1, 2, "three", 4, 5));
    assert_eq!(replaced.value2(), &"three");
    assert_eq!(replaced.set_at2(3), quintet);
    assert_eq!(Tuple1::new(1).set_at0('x'), Tuple1::new('x'));
}

#[test]
fn operations_leave_their_input_alone() {
    let original = Tuple3::new(String::from("a"), vec![1, 2], Some('c'));
    let copy = original.clone();

    let _ = original.clone().set_at1(());
    let _ = original.clone().remove_at2();
    let _ = original.clone().push(9);

    assert_eq!(original, copy);
}

fn middle_of<T, const P: usize>(tuple: T) -> T::Output
where
    T: RemoveAt<P>,
{
    tuple.remove_at()
}

#[test]
fn positions_as_generic_parameters() {
    assert_eq!(middle_of::<_, 1>(Tuple3::new(1, 2, 3)), Tuple2::new(1, 3));
    assert_eq!(
        middle_of::<_, 3>(Tuple7::new(1, 2, 3, 4, 5, 6, 7)),
        Tuple6::new(1, 2, 3, 5, 6, 7)
    );

    let quartet = Tuple4::new('a', 'b', 'c', 'd');
    assert_eq!(*quartet.get::<0>(), 'a');
    assert_eq!(*quartet.get::<3>(), 'd');
    assert_eq!(ValueAt::<2>::into_value_at(quartet), 'c');
    assert_eq!(
        AddAt::<4, _>::add_at(quartet, Tuple1::new('e')),
        Tuple5::new('a', 'b', 'c', 'd', 'e')
    );
    assert_eq!(
        SetAt::<1, _>::set_at(quartet, 2_u8),
        Tuple4::new('a', 2_u8, 'c', 'd')
    );
}

#[test]
fn native_tuples_convert_for_insertion() {
    assert_eq!((1, 'b').into_tuple(), Tuple2::new(1, 'b'));
    assert_eq!(Tuple2::new(1, 'b').into_tuple(), Tuple2::new(1, 'b'));
    assert_eq!(
        Tuple1::new("x").add_at1((1, 2, 3)),
        Tuple4::new("x", 1, 2, 3)
    );
}
