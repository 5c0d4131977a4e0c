use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yamlet::{
    from_str, node, parse_str, to_string, Deserialize, Deserializer, Result, Serialize,
    Serializer, Style,
};

#[derive(Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_struct_begin(Style::Fold)?;
        ser.serialize_struct_field("id", &self.id)?;
        ser.serialize_struct_field("name", &self.name)?;
        ser.serialize_struct_field("email", &self.email)?;
        ser.serialize_struct_field("active", &self.active)?;
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
            active: de.deserialize_struct_field("active")?,
        };
        de.deserialize_struct_end()?;
        Ok(user)
    }
}

#[derive(Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_struct_begin(Style::Fold)?;
        ser.serialize_struct_field("sku", &self.sku)?;
        ser.serialize_struct_field("name", &self.name)?;
        ser.serialize_struct_field("price", &self.price)?;
        ser.serialize_struct_field("quantity", &self.quantity)?;
        ser.serialize_struct_end()
    }
}

impl Deserialize for Product {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_struct_begin()?;
        let product = Product {
            sku: de.deserialize_struct_field("sku")?,
            name: de.deserialize_struct_field("name")?,
            price: de.deserialize_struct_field("price")?,
            quantity: de.deserialize_struct_field("quantity")?,
        };
        de.deserialize_struct_end()?;
        Ok(product)
    }
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn sample_products(count: u32) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = "active: true\nemail: alice@example.com\nid: 123\nname: Alice\n";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products = sample_products(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_array");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&sample_products(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str::<Vec<Product>>(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_only(c: &mut Criterion) {
    let text = to_string(&sample_products(100)).unwrap();

    c.bench_function("parse_to_tree", |b| b.iter(|| parse_str(black_box(&text))));
}

fn benchmark_node_trees(c: &mut Criterion) {
    let doc = node!({
        "id": 42,
        "metadata": {
            "created": "2023-01-01T00:00:00Z",
            "updated": "2023-12-31T23:59:59Z",
            "version": 3,
        },
        "tags": ["important", "verified", "production"],
    });

    c.bench_function("serialize_node_tree", |b| {
        b.iter(|| to_string(black_box(&doc)))
    });

    let text = to_string(&doc).unwrap();
    c.bench_function("reparse_node_tree", |b| {
        b.iter(|| parse_str(black_box(&text)))
    });
}

fn benchmark_string_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_strings");

    let plain = "a plain string that needs no quoting at all";
    let quoted = "a string with a colon: and, commas [so] it must be quoted";
    let escaped = "line one\nline two\twith\ttabs and \"quotes\"";

    group.bench_function("plain_string", |b| b.iter(|| to_string(black_box(&plain))));

    group.bench_function("quoted_string", |b| {
        b.iter(|| to_string(black_box(&quoted)))
    });

    group.bench_function("escaped_string", |b| {
        b.iter(|| to_string(black_box(&escaped)))
    });

    group.finish();
}

fn benchmark_primitive_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive_array");

    let numbers: Vec<i32> = (0..100).collect();
    let bools: Vec<bool> = (0..100).map(|i| i % 2 == 0).collect();
    let floats: Vec<f64> = (0..100).map(|i| f64::from(i) * 1.5).collect();

    group.bench_function("serialize_integers", |b| {
        b.iter(|| to_string(black_box(&numbers)))
    });

    group.bench_function("serialize_booleans", |b| {
        b.iter(|| to_string(black_box(&bools)))
    });

    group.bench_function("serialize_floats", |b| {
        b.iter(|| to_string(black_box(&floats)))
    });

    let numbers_text = to_string(&numbers).unwrap();
    let bools_text = to_string(&bools).unwrap();
    let floats_text = to_string(&floats).unwrap();

    group.bench_function("deserialize_integers", |b| {
        b.iter(|| from_str::<Vec<i32>>(black_box(&numbers_text)))
    });

    group.bench_function("deserialize_booleans", |b| {
        b.iter(|| from_str::<Vec<bool>>(black_box(&bools_text)))
    });

    group.bench_function("deserialize_floats", |b| {
        b.iter(|| from_str::<Vec<f64>>(black_box(&floats_text)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("roundtrip_simple", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&user)).unwrap();
            let _deserialized: User = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_array,
    benchmark_deserialize_array,
    benchmark_parse_only,
    benchmark_node_trees,
    benchmark_string_serialization,
    benchmark_primitive_array,
    benchmark_roundtrip
);
criterion_main!(benches);
