mod common;

use common::parse;
use serde::Deserialize;
use serde_stc::{from_reader, from_slice, from_str, from_value, Engine, ErrorKind, Value};
use std::collections::HashMap;

#[derive(Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    note: Option<String>,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Level {
    Debug,
    Info,
}

#[derive(Deserialize, Debug, PartialEq)]
enum Shape {
    Circle(f64),
    Rect { w: i64, h: i64 },
}

#[derive(Deserialize, Debug, PartialEq)]
struct Logging {
    level: Level,
    shapes: Vec<Shape>,
}

const ORDER: &str = "\
order_id: 12345
customer.id: 123
customer.name: ```
Alice
```
customer.active: `true`
customer.tags.$0: ```
vip
```
items.$1.sku: ```
GADGET-002
```
items.$1.price: 49.99
items.$1.quantity: 1
items.$0.sku: ```
WIDGET-001
```
items.$0.price: 29.99
items.$0.quantity: 2
";

#[test]
fn test_simple_struct() {
    let user: User = parse("id: 7\nname: ```\nBob\n```\nactive: `false`\ntags: []").unwrap();
    assert_eq!(
        user,
        User {
            id: 7,
            name: "Bob".to_string(),
            active: false,
            tags: vec![],
        }
    );
}

#[test]
fn test_nested_struct() {
    let order: Order = parse(ORDER).unwrap();
    assert_eq!(order.order_id, 12345);
    assert_eq!(order.customer.tags, vec!["vip".to_string()]);
    assert_eq!(
        order.items,
        vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ]
    );
    assert_eq!(order.note, None);
}

#[test]
fn test_option_present() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Wrapper {
        value: Option<i32>,
    }

    let present: Wrapper = parse("value: 3").unwrap();
    assert_eq!(present.value, Some(3));
    let absent: Wrapper = parse("{}").unwrap();
    assert_eq!(absent.value, None);
}

#[test]
fn test_integer_widens_into_float_field() {
    let product: Product = parse("sku: ```\nX\n```\nprice: 3\nquantity: 1").unwrap();
    assert_eq!(product.price, 3.0);
}

#[test]
fn test_enums() {
    let doc = "\
level: ```
info
```
shapes.$0.Circle: 1.5
shapes.$1.Rect.w: 2
shapes.$1.Rect.h: 3";
    let logging: Logging = parse(doc).unwrap();
    assert_eq!(
        logging,
        Logging {
            level: Level::Info,
            shapes: vec![Shape::Circle(1.5), Shape::Rect { w: 2, h: 3 }],
        }
    );
}

#[test]
fn test_unknown_enum_variant() {
    let err = parse::<Logging>("level: ```\ntrace\n```\nshapes: []").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
    assert!(err.to_string().contains("trace"));
}

#[test]
fn test_hashmap_and_root_list() {
    let map: HashMap<String, i64> = parse("a: 1\nb: 2").unwrap();
    assert_eq!(map.get("b"), Some(&2));

    let list: Vec<bool> = parse("$1: `false`\n$0: `true`").unwrap();
    assert_eq!(list, vec![true, false]);

    let pair: (i64, String) = parse("$0: 1\n$1: ```\none\n```").unwrap();
    assert_eq!(pair, (1, "one".to_string()));
}

#[test]
fn test_type_mismatch_is_custom_error() {
    let err = parse::<User>("id: ```\nseven\n```\nname: ```\nx\n```\nactive: `true`\ntags: []")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
    assert!(!err.is_parse_error());
}

#[test]
fn test_missing_field() {
    let err = parse::<Product>("sku: ```\nX\n```").unwrap_err();
    assert!(err.to_string().contains("missing field `price`"));
}

#[test]
fn test_parse_errors_pass_through() {
    let err = parse::<Product>("sku: X").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValueLiteral);
}

#[test]
fn test_from_slice_and_reader() {
    let doc = "sku: ```\nX\n```\nprice: 1.5\nquantity: 4";
    let from_bytes = from_slice::<Product>(doc.as_bytes());
    let from_stream = from_reader::<_, Product>(std::io::Cursor::new(doc));
    let from_text = from_str::<Product>(doc);

    if Engine::Primary.is_available() {
        assert_eq!(from_bytes.unwrap().quantity, 4);
        assert_eq!(from_stream.unwrap().sku, "X");
        assert_eq!(from_text.unwrap().price, 1.5);
    } else {
        for err in [
            from_bytes.unwrap_err(),
            from_stream.unwrap_err(),
            from_text.unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::EngineUnavailable);
        }
    }
}

#[test]
fn test_from_slice_rejects_invalid_utf8() {
    let err = from_slice::<Product>(&[b's', 0xff]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
}

#[test]
fn test_from_value_roundtrip_through_value() {
    let value = common::decode(ORDER).unwrap();
    let back: Value = from_value(value.clone()).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_serialize_value_to_json() {
    let value = common::decode("b.$0: 1\nb.$1: 2.5\na: ```\nhi\n```\nc: `true`\nd: {}").unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"b":[1,2.5],"a":"hi","c":true,"d":{}}"#);
}

#[test]
fn test_value_from_json() {
    let value: Value = serde_json::from_str(r#"{"a":[1,{"b":false}],"c":"x"}"#).unwrap();
    assert_eq!(value, common::decode("a.$0: 1\na.$1.b: `false`\nc: ```\nx\n```").unwrap());
}
