// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use crate::kind::*;

#[test]
fn test_kind_names_round_trip() {
    for kind in Kind::ALL.iter() {
        assert_eq!(*kind, kind.name().parse::<Kind>().unwrap());
        assert_eq!(kind.name(), kind.to_string());
    }
}

#[test]
fn test_kind_aliases() {
    assert_eq!(Kind::Boolean, " BOOL ".parse::<Kind>().unwrap());
    assert_eq!(Kind::Character, "Character".parse::<Kind>().unwrap());
    assert_eq!(Kind::String, "String".parse::<Kind>().unwrap());
    assert_eq!(Kind::Int8, "Byte".parse::<Kind>().unwrap());
    assert_eq!(Kind::Int16, "i16".parse::<Kind>().unwrap());
    assert_eq!(Kind::Int32, "Integer".parse::<Kind>().unwrap());
    assert_eq!(Kind::Int64, "long".parse::<Kind>().unwrap());
    assert_eq!(Kind::Float32, "Float".parse::<Kind>().unwrap());
    assert_eq!(Kind::Float64, "double".parse::<Kind>().unwrap());
}

#[test]
fn test_unsupported_kind() {
    for tag in &["u16", "usize", "", "   ", "list", "Integer[]"] {
        match tag.parse::<Kind>() {
            Err(Error::UnsupportedKind { tag: t, valid }) => {
                assert_eq!(*tag, t.as_str());
                assert_eq!(
                    "boolean, character, string, int8, int16, int32, int64, float32, float64",
                    valid
                );
            }
            other => panic!("Expected an unsupported kind error, got {:?}", other),
        }
    }
}

#[test]
fn test_unsupported_kind_message() {
    let err = "u8".parse::<Kind>().unwrap_err();
    assert_eq!(
        "Unsupported kind 'u8'; expected one of: boolean, character, string, int8, int16, int32, \
         int64, float32, float64",
        err.to_string()
    );
}

#[test]
fn test_kind_coercion_table() {
    assert_eq!(
        Some(Value::Boolean(true)),
        Kind::Boolean.coerce("t").unwrap()
    );
    assert_eq!(
        Some(Value::Character('x')),
        Kind::Character.coerce("xyz").unwrap()
    );
    assert_eq!(
        Some(Value::String("xyz".to_owned())),
        Kind::String.coerce("xyz").unwrap()
    );
    assert_eq!(Some(Value::Int8(-3)), Kind::Int8.coerce("-3").unwrap());
    assert_eq!(Some(Value::Int16(300)), Kind::Int16.coerce("300").unwrap());
    assert_eq!(
        Some(Value::Int32(56942)),
        Kind::Int32.coerce("56942").unwrap()
    );
    assert_eq!(
        Some(Value::Int64(99999999999999)),
        Kind::Int64.coerce("99999999999999").unwrap()
    );
    assert_eq!(
        Some(Value::Float32(0.5)),
        Kind::Float32.coerce("0.5").unwrap()
    );
    assert_eq!(
        Some(Value::Float64(2.25)),
        Kind::Float64.coerce("2.25").unwrap()
    );

    assert_eq!(
        Some(Value::Float32(0.5)),
        Kind::Float32.coerce(" 0.5 ").unwrap()
    );
    assert_eq!(None, Kind::Float64.coerce("nan").unwrap());
    assert_eq!(None, Kind::Int8.coerce("300").unwrap());
    assert_eq!(None, Kind::Boolean.coerce("yes").unwrap());
    assert!(Kind::Character.coerce("").is_err());
}

#[test]
fn test_value_kind_matches_coercion_kind() {
    for kind in Kind::ALL.iter() {
        let input = match *kind {
            Kind::Boolean => "false",
            _ => "1",
        };
        assert_eq!(*kind, kind.coerce(input).unwrap().unwrap().kind());
    }
}

#[test]
fn test_value_display() {
    assert_eq!("true", Value::Boolean(true).to_string());
    assert_eq!("c", Value::Character('c').to_string());
    assert_eq!("foo bar", Value::String("foo bar".to_owned()).to_string());
    assert_eq!("-12", Value::Int64(-12).to_string());
    assert_eq!("1.5", Value::Float64(1.5).to_string());
}

#[cfg(feature = "serde")]
#[test]
fn test_kind_and_value_serde() {
    assert_eq!(
        "\"float32\"",
        serde_json::to_string(&Kind::Float32).unwrap()
    );
    assert_eq!(
        Kind::Int16,
        serde_json::from_str::<Kind>("\"int16\"").unwrap()
    );
    let value = Value::Int32(56942);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!("{\"int32\":56942}", json);
    assert_eq!(value, serde_json::from_str::<Value>(&json).unwrap());
}
