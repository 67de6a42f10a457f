//! End-to-end use of the public API the way a configuration loader drives it:
//! each field arrives as a declared type name plus raw text.

use confdata::{ConfValue, DataType, LocalFs, Validator, is_recognized_name, kind_from_name};
use pretty_assertions::assert_eq;

struct Field<'a> {
    key: &'a str,
    type_name: &'a str,
    raw: &'a str,
}

fn load<'a>(
    validator: &Validator<LocalFs>,
    fields: &[Field<'a>],
) -> Result<Vec<(&'a str, ConfValue)>, Vec<String>> {
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for field in fields {
        if !is_recognized_name(field.type_name) {
            errors.push(format!("{}: unknown type {:?}", field.key, field.type_name));
            continue;
        }
        let kind = kind_from_name(field.type_name).unwrap();
        match validator.parse_value(kind, field.raw) {
            Ok(value) => values.push((field.key, value)),
            Err(err) => errors.push(format!("{}: {}", field.key, err)),
        }
    }

    if errors.is_empty() { Ok(values) } else { Err(errors) }
}

#[test]
fn test_loads_a_valid_section() {
    let dir = tempfile::tempdir().unwrap();
    let runpath = dir.path().join("runs");
    std::fs::create_dir(&runpath).unwrap();
    let obs = dir.path().join("observations.txt");
    std::fs::write(&obs, "1 2 3\n").unwrap();

    let runpath_str = runpath.to_str().unwrap().to_string();
    let obs_str = obs.to_str().unwrap().to_string();
    let fields = [
        Field { key: "NUM_REALIZATIONS", type_name: "positive integer", raw: "100" },
        Field { key: "STD_CUTOFF", type_name: "positive floating point number", raw: "1e-6" },
        Field { key: "START", type_name: "date", raw: "01/01/2017" },
        Field { key: "RUNPATH", type_name: "folder", raw: &runpath_str },
        Field { key: "OBS_CONFIG", type_name: "file", raw: &obs_str },
        Field { key: "JOBNAME", type_name: "string", raw: "case_%d" },
    ];

    let values = load(&Validator::local(), &fields).unwrap();

    assert_eq!(values[0], ("NUM_REALIZATIONS", ConfValue::Integer(100)));
    assert_eq!(values[1].1.as_float(), Some(1e-6));
    assert_eq!(values[2].1.as_timestamp(), Some(1_483_228_800));
    assert_eq!(values[3].1.as_path(), Some(runpath.as_path()));
    assert_eq!(values[4].1.as_path(), Some(obs.as_path()));
    assert_eq!(values[5].1.as_str(), Some("case_%d"));
}

#[test]
fn test_reports_every_bad_field() {
    let fields = [
        Field { key: "NUM_REALIZATIONS", type_name: "positive integer", raw: "0" },
        Field { key: "MAX_RUNTIME", type_name: "Integer", raw: "10" },
        Field { key: "OBS_CONFIG", type_name: "file", raw: "/path/that/does/not/exist" },
        Field { key: "JOBNAME", type_name: "string", raw: "ok" },
    ];

    let errors = load(&Validator::local(), &fields).unwrap_err();

    assert_eq!(errors.len(), 3);
    assert!(errors[0].starts_with("NUM_REALIZATIONS: CFG0102"));
    assert!(errors[1].contains("unknown type"));
    assert!(errors[2].starts_with("OBS_CONFIG: CFG0106"));
}

#[test]
fn test_names_round_trip_through_facade() {
    for kind in DataType::ALL {
        assert_eq!(confdata::name_of(confdata::kind_from_name(kind.name()).unwrap()), kind.name());
    }
}
