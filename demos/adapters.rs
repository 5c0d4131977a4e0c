//! Hand-written adapters for enums, optional fields and nested records.
//!
//! Run with: cargo run --example adapters

use std::error::Error;
use yamlet::{from_str, to_string, Deserialize, Deserializer, Result, Serialize, Serializer, Style};

/// An enum serializes as a one-entry mapping: the key is the variant tag
/// (here the declaration index), the value is the payload.
#[derive(Debug, PartialEq)]
enum Transport {
    Walk,
    Bike(u32),
    Transit { line: String, stops: u32 },
}

impl Serialize for Transport {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_map_begin(Style::Fold)?;
        match self {
            Transport::Walk => ser.serialize_map_entry(&0u32, &())?,
            Transport::Bike(km) => ser.serialize_map_entry(&1u32, km)?,
            Transport::Transit { line, stops } => {
                ser.serialize_map_key(&2u32)?;
                ser.serialize_map_value_begin()?;
                ser.serialize_struct_begin(Style::Fold)?;
                ser.serialize_struct_field("line", line)?;
                ser.serialize_struct_field("stops", stops)?;
                ser.serialize_struct_end()?;
                ser.serialize_map_value_end()?;
            }
        }
        ser.serialize_map_end()
    }
}

impl Deserialize for Transport {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_map_begin()?;
        let tag: u32 = de.deserialize_map_key()?;
        let transport = match tag {
            0 => {
                let () = de.deserialize_map_value()?;
                Transport::Walk
            }
            1 => Transport::Bike(de.deserialize_map_value()?),
            2 => {
                de.deserialize_map_value_begin()?;
                de.deserialize_struct_begin()?;
                let line = de.deserialize_struct_field("line")?;
                let stops = de.deserialize_struct_field("stops")?;
                de.deserialize_struct_end()?;
                de.deserialize_map_value_end()?;
                Transport::Transit { line, stops }
            }
            other => {
                return Err(yamlet::Error::conversion(
                    other.to_string(),
                    "Transport variant",
                ))
            }
        };
        de.deserialize_map_end()?;
        Ok(transport)
    }
}

#[derive(Debug, PartialEq)]
struct Trip {
    name: String,
    legs: Vec<Transport>,
    note: Option<String>,
}

impl Serialize for Trip {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_struct_begin(Style::Fold)?;
        ser.serialize_struct_field("name", &self.name)?;
        ser.serialize_struct_field("legs", &self.legs)?;
        ser.serialize_struct_field("note", &self.note)?;
        ser.serialize_struct_end()
    }
}

impl Deserialize for Trip {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_struct_begin()?;
        let trip = Trip {
            name: de.deserialize_struct_field("name")?,
            legs: de.deserialize_struct_field("legs")?,
            note: de.deserialize_struct_field("note")?,
        };
        de.deserialize_struct_end()?;
        Ok(trip)
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let trip = Trip {
        name: "commute".to_string(),
        legs: vec![
            Transport::Walk,
            Transport::Transit {
                line: "U2".to_string(),
                stops: 6,
            },
            Transport::Bike(2),
        ],
        note: None,
    };

    let text = to_string(&trip)?;
    println!("Trip as Yamlet:\n{}", text);

    let trip_back: Trip = from_str(&text)?;
    assert_eq!(trip, trip_back);

    // Fields are found by name, so documents may order them freely
    let reordered = "note: scenic route\nlegs:\n  - 1: 12\nname: weekend\n";
    let weekend: Trip = from_str(reordered)?;
    println!("Reordered document parsed: {:?}", weekend);

    Ok(())
}
