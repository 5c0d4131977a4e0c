//! Integration round-trips through hand-written adapters.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;
use yamlet::{
    from_str, from_value, to_string, to_value, Deserialize, Deserializer, Result, Serialize,
    Serializer, Style,
};

fn assert_roundtrip<T>(original: &T)
where
    T: Serialize + Deserialize + PartialEq + std::fmt::Debug,
{
    let text = to_string(original).unwrap();
    let deserialized: T = from_str(&text).unwrap();
    assert_eq!(*original, deserialized, "text was: {text:?}");
}

#[derive(Debug, PartialEq, Clone)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_struct_begin(Style::Fold)?;
        ser.serialize_struct_field("id", &self.id)?;
        ser.serialize_struct_field("name", &self.name)?;
        ser.serialize_struct_field("active", &self.active)?;
        ser.serialize_struct_field("tags", &self.tags)?;
        ser.serialize_struct_end()
    }
}

impl Deserialize for User {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_struct_begin()?;
        let user = User {
            id: de.deserialize_struct_field("id")?,
            name: de.deserialize_struct_field("name")?,
            active: de.deserialize_struct_field("active")?,
            tags: de.deserialize_struct_field("tags")?,
        };
        de.deserialize_struct_end()?;
        Ok(user)
    }
}

#[derive(Debug, PartialEq, Clone)]
struct Order {
    order_id: u32,
    customer: User,
    totals: Vec<f64>,
    note: Option<String>,
}

impl Serialize for Order {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_struct_begin(Style::Fold)?;
        ser.serialize_struct_field("order_id", &self.order_id)?;
        ser.serialize_struct_field("customer", &self.customer)?;
        ser.serialize_struct_field("totals", &self.totals)?;
        ser.serialize_struct_field("note", &self.note)?;
        ser.serialize_struct_end()
    }
}

impl Deserialize for Order {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_struct_begin()?;
        let order = Order {
            order_id: de.deserialize_struct_field("order_id")?,
            customer: de.deserialize_struct_field("customer")?,
            totals: de.deserialize_struct_field("totals")?,
            note: de.deserialize_struct_field("note")?,
        };
        de.deserialize_struct_end()?;
        Ok(order)
    }
}

/// Tagged by declaration index.
#[derive(Debug, PartialEq, Clone)]
enum Shape {
    Dot,
    Circle(u32),
    Rect { w: u32, h: u32 },
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_map_begin(Style::Fold)?;
        match self {
            Shape::Dot => ser.serialize_map_entry(&0u32, &())?,
            Shape::Circle(radius) => ser.serialize_map_entry(&1u32, radius)?,
            Shape::Rect { w, h } => {
                ser.serialize_map_key(&2u32)?;
                ser.serialize_map_value_begin()?;
                ser.serialize_struct_begin(Style::Fold)?;
                ser.serialize_struct_field("w", w)?;
                ser.serialize_struct_field("h", h)?;
                ser.serialize_struct_end()?;
                ser.serialize_map_value_end()?;
            }
        }
        ser.serialize_map_end()
    }
}

impl Deserialize for Shape {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_map_begin()?;
        let tag: u32 = de.deserialize_map_key()?;
        let shape = match tag {
            0 => {
                let () = de.deserialize_map_value()?;
                Shape::Dot
            }
            1 => Shape::Circle(de.deserialize_map_value()?),
            2 => {
                de.deserialize_map_value_begin()?;
                de.deserialize_struct_begin()?;
                let w = de.deserialize_struct_field("w")?;
                let h = de.deserialize_struct_field("h")?;
                de.deserialize_struct_end()?;
                de.deserialize_map_value_end()?;
                Shape::Rect { w, h }
            }
            other => {
                return Err(yamlet::Error::conversion(other.to_string(), "Shape variant"))
            }
        };
        de.deserialize_map_end()?;
        Ok(shape)
    }
}

/// Tagged by variant name instead of index; both schemes are just mapping
/// keys.
#[derive(Debug, PartialEq, Clone)]
enum Status {
    Ready,
    Waiting(u64),
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_map_begin(Style::Fold)?;
        match self {
            Status::Ready => ser.serialize_map_entry(&"ready", &())?,
            Status::Waiting(ms) => ser.serialize_map_entry(&"waiting", ms)?,
        }
        ser.serialize_map_end()
    }
}

impl Deserialize for Status {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_map_begin()?;
        let tag: String = de.deserialize_map_key()?;
        let status = match tag.as_str() {
            "ready" => {
                let () = de.deserialize_map_value()?;
                Status::Ready
            }
            "waiting" => Status::Waiting(de.deserialize_map_value()?),
            other => return Err(yamlet::Error::conversion(other, "Status variant")),
        };
        de.deserialize_map_end()?;
        Ok(status)
    }
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    }
}

#[test]
fn simple_struct() {
    assert_roundtrip(&sample_user());
}

#[test]
fn nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: sample_user(),
        totals: vec![29.99, 49.5],
        note: Some("leave at the door".to_string()),
    };
    assert_roundtrip(&order);

    let order = Order {
        note: None,
        ..order
    };
    assert_roundtrip(&order);
}

#[test]
fn sequence_of_structs() {
    let users = vec![
        sample_user(),
        User {
            id: 124,
            name: "Bob".to_string(),
            active: false,
            tags: vec![],
        },
    ];
    assert_roundtrip(&users);
}

#[test]
fn enums_by_ordinal() {
    assert_roundtrip(&Shape::Dot);
    assert_roundtrip(&Shape::Circle(431));
    assert_roundtrip(&Shape::Rect { w: 640, h: 480 });
    assert_roundtrip(&vec![
        Shape::Circle(1),
        Shape::Dot,
        Shape::Rect { w: 2, h: 3 },
    ]);
}

#[test]
fn enums_by_name() {
    assert_roundtrip(&Status::Ready);
    assert_roundtrip(&Status::Waiting(1500));
}

#[test]
fn primitives() {
    assert_roundtrip(&42i32);
    assert_roundtrip(&-42i8);
    assert_roundtrip(&i64::MIN);
    assert_roundtrip(&i64::MAX);
    assert_roundtrip(&u64::MAX);
    assert_roundtrip(&255u8);
    assert_roundtrip(&4.25f64);
    assert_roundtrip(&-0.5f32);
    assert_roundtrip(&f64::INFINITY);
    assert_roundtrip(&f64::NEG_INFINITY);
    assert_roundtrip(&true);
    assert_roundtrip(&false);
    assert_roundtrip(&'y');
    assert_roundtrip(&'\n');
    assert_roundtrip(&"hello world".to_string());
}

#[test]
fn special_strings() {
    let cases = [
        "",
        "hello, world",
        "line1\nline2",
        "tab\there",
        " leading space",
        "trailing space ",
        "true",
        "null",
        "Null",
        "NULL",
        "~",
        "123",
        "1.10",
        "-",
        "- item",
        "\"quoted\"",
        "a: b",
        "[bracketed]",
        "#comment",
        "unicode: \u{1F980} crab",
    ];
    for s in cases {
        assert_roundtrip(&s.to_string());
    }
}

#[test]
fn standard_containers() {
    assert_roundtrip(&vec![1, 2, 3]);
    assert_roundtrip(&Vec::<i32>::new());
    assert_roundtrip(&vec![vec![1], vec![], vec![2, 3]]);
    assert_roundtrip(&[7u8; 4]);
    assert_roundtrip(&(1, "two".to_string(), 3.5));
    assert_roundtrip(&(1u8, 2i16, 3u32, 4i64));
    assert_roundtrip(&(1, 2, 3, 4, 5, "six".to_string(), 7.0, true));
    assert_roundtrip(&vec![Some(1), None, Some(3)]);
    assert_roundtrip(&Some(Some(5)));

    let mut btree = BTreeMap::new();
    btree.insert("one".to_string(), 1);
    btree.insert("two".to_string(), 2);
    assert_roundtrip(&btree);

    let mut hash = HashMap::new();
    hash.insert("k".to_string(), vec![1, 2]);
    assert_roundtrip(&hash);

    let mut index = IndexMap::new();
    index.insert("z".to_string(), 26);
    index.insert("a".to_string(), 1);
    assert_roundtrip(&index);

    let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    assert_roundtrip(&set);
}

#[test]
fn dates_and_big_integers() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_roundtrip(&date);

    let moment: DateTime<Utc> = "2023-06-15T12:30:45Z".parse().unwrap();
    assert_roundtrip(&moment);

    let big: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_roundtrip(&big);
    assert_roundtrip(&vec![big.clone(), -big]);
}

#[test]
fn field_order_independence() {
    let text = "tags:\n  - admin\n  - developer\nactive: true\nname: Alice\nid: 123\n";
    let user: User = from_str(text).unwrap();
    assert_eq!(user, sample_user());
}

#[test]
fn unknown_fields_are_ignored() {
    let text = "id: 1\nname: Ada\nextra: ignored\nactive: false\ntags: []\n";
    let user: User = from_str(text).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.tags, Vec::<String>::new());
}

#[test]
fn duplicate_keys_read_first() {
    let text = "id: 1\nid: 2\nname: Ada\nactive: true\ntags: []\n";
    let user: User = from_str(text).unwrap();
    assert_eq!(user.id, 1);
}

#[test]
fn tree_backend_round_trip() {
    let order = Order {
        order_id: 7,
        customer: sample_user(),
        totals: vec![1.5],
        note: None,
    };
    let tree = to_value(&order).unwrap();
    let back: Order = from_value(&tree).unwrap();
    assert_eq!(back, order);

    // the tree renders to the same text the direct writer produces
    assert_eq!(to_string(&tree).unwrap(), to_string(&order).unwrap());
}

#[test]
fn whole_document_as_index_map() {
    let text = "first: 1\nsecond: 2\nthird: 3\n";
    let map: IndexMap<String, i32> = from_str(text).unwrap();
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, ["first", "second", "third"]);
    assert_eq!(to_string(&map).unwrap(), text);
}
