//! Basic Yamlet serialization and deserialization.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use yamlet::{from_str, to_string, Deserialize, Deserializer, Result, Serialize, Serializer, Style};

#[derive(Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_struct_begin(Style::Fold)?;
        ser.serialize_struct_field("id", &self.id)?;
        ser.serialize_struct_field("name", &self.name)?;
        ser.serialize_struct_field("email", &self.email)?;
        ser.serialize_struct_end()
    }
}

impl Deserialize for User {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_struct_begin()?;
        let user = User {
            id: de.deserialize_struct_field("id")?,
            name: de.deserialize_struct_field("name")?,
            email: de.deserialize_struct_field("email")?,
        };
        de.deserialize_struct_end()?;
        Ok(user)
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    // Serialize to Yamlet
    let text = to_string(&users)?;
    println!("Yamlet output:\n{}", text);

    // Deserialize back to structs
    let users_back: Vec<User> = from_str(&text)?;
    assert_eq!(users, users_back);
    println!("Round-trip successful");

    Ok(())
}
