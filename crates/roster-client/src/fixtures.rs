//! Canned character records used by the fixture client and the test suites.

use roster_types::Character;

/// The canned roster, shaped like the catalog's wire records.
pub fn characters() -> Vec<Character> {
    serde_json::from_value(serde_json::json!([
        {
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "birth_year": "19BBY"
        },
        {
            "name": "Leia Organa",
            "height": "150",
            "mass": "49",
            "birth_year": "19BBY"
        },
        {
            "name": "Han Solo",
            "height": "180",
            "mass": "80",
            "birth_year": "29BBY"
        },
        {
            "name": "Darth Vader",
            "height": "202",
            "mass": "136",
            "birth_year": "41.9BBY"
        },
        {
            "name": "Obi-Wan Kenobi",
            "height": "182",
            "mass": "77",
            "birth_year": "57BBY"
        },
        {
            "name": "R2-D2",
            "height": "96",
            "mass": "32",
            "birth_year": "33BBY"
        }
    ]))
    .expect("fixture roster is valid")
}

/// Case-insensitive name containment, mirroring the catalog's search
/// semantics. An empty query matches everything.
pub fn matching(roster: &[Character], query: &str) -> Vec<Character> {
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|character| character.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_records_carry_their_wire_fields() {
        let roster = characters();
        assert_eq!(roster[0].name, "Luke Skywalker");
        assert_eq!(
            roster[0].extra.get("birth_year").and_then(|v| v.as_str()),
            Some("19BBY")
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let roster = characters();
        let hits = matching(&roster, "skywalker");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Luke Skywalker");
    }

    #[test]
    fn empty_query_matches_the_whole_roster() {
        let roster = characters();
        assert_eq!(matching(&roster, "").len(), roster.len());
    }
}
