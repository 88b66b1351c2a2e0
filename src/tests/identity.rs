use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::hash::hash_ptr;
use crate::{Identity, Kind, Value, hashcode};

#[test]
fn null_reference_is_zero() {
    assert!(Identity::NULL.is_null());
    assert_eq!(hash_ptr(Identity::NULL), 0);
    assert_eq!(hashcode(&Value::Other(Identity::default())), 0);
}

/// Modulo 63, not a mask of 64.
#[test]
fn reduced_modulo_63() {
    assert_eq!(hash_ptr(Identity::from_addr(63)), 0);
    assert_eq!(hash_ptr(Identity::from_addr(64)), 1);
    assert_eq!(hash_ptr(Identity::from_addr(0x1000)), 0x1000 % 63);
    assert_eq!(hash_ptr(Identity::from_addr(usize::MAX)), (usize::MAX % 63) as i32);
}

#[test]
fn stable_while_alive() {
    let table: HashMap<String, i32> = HashMap::new();
    let v = Value::other(&table);
    assert_eq!(hashcode(&v), hashcode(&v));
    assert_eq!(hashcode(&v), hashcode(&Value::other(&table)));
}

/// Two fresh empty tables: bounded hashes, equality not required.
#[test]
fn distinct_empty_tables_are_bounded() {
    let a: Box<HashMap<u8, u8>> = Box::default();
    let b: Box<HashMap<u8, u8>> = Box::default();
    assert_ne!(Identity::of(&*a), Identity::of(&*b));
    for t in [&a, &b] {
        let h = hashcode(&Value::other(&**t));
        assert!((0..=62).contains(&h));
    }
}

#[test]
fn hashes_by_identity_not_content() {
    let a = vec![1, 2, 3];
    let b = vec![1, 2, 3];
    assert_eq!(a, b);
    assert_ne!(Identity::of(&a), Identity::of(&b));
}

#[test]
fn rc_clones_share_identity() {
    let rc = Rc::new([0_u64; 4]);
    let clone = Rc::clone(&rc);
    assert_eq!(Identity::of_rc(&rc), Identity::of_rc(&clone));
    assert_eq!(Identity::of_rc(&rc), Identity::of(&*rc));

    let arc: Arc<str> = Arc::from("shared");
    let clone = Arc::clone(&arc);
    assert_eq!(Identity::of_arc(&arc), Identity::of_arc(&clone));
}

/// Fat pointers keep only the data address.
#[test]
fn slice_identity_is_data_address() {
    let data = [1_u32, 2, 3];
    let slice: &[u32] = &data;
    assert_eq!(Identity::of(slice), Identity::of(&data[0]));
}

#[test]
fn kinds() {
    let t = ();
    let cases = [
        (Value::Nil, Kind::Nil, "nil"),
        (Value::from(true), Kind::Boolean, "boolean"),
        (Value::from(1.5), Kind::Number, "number"),
        (Value::from("s"), Kind::String, "string"),
        (Value::other(&t), Kind::Other, "other"),
    ];
    for (value, kind, name) in cases {
        assert_eq!(value.kind(), kind);
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn value_conversions() {
    assert!(Value::from(None::<bool>).is_nil());
    assert_eq!(Value::from(Some(true)), Value::Boolean(true));
    assert_eq!(Value::from("ab").as_bytes(), Some(&b"ab"[..]));
    assert_eq!(Value::from(7).as_bytes(), None);
    assert_eq!(Value::from(Identity::from_addr(5)), Value::Other(Identity::from_addr(5)));
}

#[test]
fn debug_format() {
    let dbg = format!("{:?}", Identity::from_addr(0xbeef));
    assert_eq!(dbg, "Identity(0xbeef)");
}
