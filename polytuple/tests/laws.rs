use {
    polytuple::prelude::*,
    quickcheck::{Gen, QuickCheck, TestResult},
    std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    },
};

type Sample = Tuple4<u8, i16, bool, char>;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn removal_undoes_insertion_property(tuple: Sample, value: String) -> bool {
    tuple.add_at0((value.clone(),)).remove_at0() == tuple
        && tuple.add_at1((value.clone(),)).remove_at1() == tuple
        && tuple.add_at2((value.clone(),)).remove_at2() == tuple
        && tuple.add_at3((value.clone(),)).remove_at3() == tuple
        && tuple.add_at4((value,)).remove_at4() == tuple
}

fn insertion_places_value_property(tuple: Sample, value: String) -> bool {
    tuple.add_at0((value.clone(),)).value0() == &value
        && tuple.add_at2((value.clone(),)).value2() == &value
        && tuple.push(value.clone()).value4() == &value
        && tuple.add_at2((value,)).value3() == tuple.value2()
}

fn replacement_is_observable_property(tuple: Sample, value: u64) -> bool {
    let replaced = tuple.set_at1(value);
    replaced.value1() == &value
        && replaced.value0() == tuple.value0()
        && replaced.value2() == tuple.value2()
        && replaced.value3() == tuple.value3()
        && replaced.set_at1(*tuple.value1()) == tuple
}

fn equality_and_hashing_property(a: Sample, b: Sample) -> bool {
    (a == b) == (b == a)
        && a == a
        && (a != b || hash_of(&a) == hash_of(&b))
        && a.eq_tuple(&b) == (a == b)
}

fn dynamic_order_property(a: Sample, b: Sample) -> bool {
    a.compare(&b) == Ok(a.cmp(&b)) && b.compare(&a) == Ok(a.cmp(&b).reverse())
}

fn exact_sequence_property(values: Vec<u32>) -> TestResult {
    let built = Tuple5::from_iter_exact(values.clone());
    if values.len() != 5 {
        return TestResult::from_bool(built.is_err());
    }
    match built {
        Ok(tuple) => {
            let read: Vec<u32> = tuple
                .values()
                .filter_map(|element| element.downcast_ref::<u32>().copied())
                .collect();
            TestResult::from_bool(read == values)
        }
        Err(error) => TestResult::error(format!("rejected {:?}: {}", values, error)),
    }
}

fn unchecked_sequence_property(values: Vec<u32>, offset: u8) -> bool {
    let offset = usize::from(offset % 8);
    let tuple = Tuple3::from_iter_at(values.clone(), offset);
    *tuple.value0() == values.get(offset).copied()
        && *tuple.value1() == values.get(offset + 1).copied()
        && *tuple.value2() == values.get(offset + 2).copied()
}

fn checker() -> QuickCheck {
    QuickCheck::new().gen(Gen::new(16))
}

#[test]
fn removal_undoes_insertion() {
    checker().quickcheck(removal_undoes_insertion_property as fn(_, _) -> bool)
}

#[test]
fn insertion_places_value() {
    checker().quickcheck(insertion_places_value_property as fn(_, _) -> bool)
}

#[test]
fn replacement_is_observable() {
    checker().quickcheck(replacement_is_observable_property as fn(_, _) -> bool)
}

#[test]
fn equality_and_hashing() {
    checker().quickcheck(equality_and_hashing_property as fn(_, _) -> bool)
}

#[test]
fn dynamic_order() {
    checker().quickcheck(dynamic_order_property as fn(_, _) -> bool)
}

#[test]
fn exact_sequence() {
    checker().quickcheck(exact_sequence_property as fn(_) -> TestResult)
}

#[test]
fn unchecked_sequence() {
    checker().quickcheck(unchecked_sequence_property as fn(_, _) -> bool)
}
