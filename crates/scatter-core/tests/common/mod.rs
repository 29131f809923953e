// File: crates/scatter-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use scatter_core::{FinishTime, Record};

pub fn rec(year: i32, time: &str, name: &str, nationality: &str, doping: &str) -> Record {
    Record {
        year,
        finish_time: FinishTime::parse(time).expect("valid MM:SS"),
        name: name.into(),
        nationality: nationality.into(),
        doping: doping.into(),
    }
}

/// The two-record scenario: one clean, one with an allegation.
pub fn two_riders() -> Vec<Record> {
    vec![
        rec(1994, "35:12", "A", "X", ""),
        rec(1996, "36:50", "B", "Y", "Admitted"),
    ]
}

/// A handful of real-looking entries spanning several years and both categories.
pub fn sample() -> Vec<Record> {
    vec![
        rec(1995, "36:50", "Marco Pantani", "ITA", "Alleged drug use during 1995 due to high hematocrit levels"),
        rec(1997, "36:55", "Marco Pantani", "ITA", "Alleged drug use during 1997 due to high hermatocrit levels"),
        rec(1994, "37:15", "Marco Pantani", "ITA", "Alleged drug use during 1994 due to high hermatocrit levels"),
        rec(2004, "37:36", "Lance Armstrong", "USA", "2004 Tour de France title stripped by UCI in 2012"),
        rec(2008, "38:05", "Carlos Sastre", "ESP", ""),
        rec(1991, "38:40", "Miguel Indurain", "ESP", ""),
        rec(2015, "39:12", "Nairo Quintana", "COL", ""),
        rec(1992, "39:50", "Pedro Delgado", "ESP", ""),
    ]
}

/// Two-entry wire payload, including fields the loader ignores.
pub const SAMPLE_JSON: &str = r#"[
  {"Time":"36:50","Place":1,"Seconds":2210,"Name":"Marco Pantani","Year":1995,"Nationality":"ITA","Doping":"Alleged drug use during 1995 due to high hematocrit levels","URL":""},
  {"Time":"39:50","Place":2,"Seconds":2390,"Name":"Pedro Delgado","Year":1992,"Nationality":"ESP","Doping":"","URL":""}
]"#;
