use std::io::prelude::*;

const LETTERS_SETS: &str = include_str!("src/letters_sets.txt");
const SCHEMES: &str = include_str!("src/schemes.txt");

fn main() {
    println!("cargo:rerun-if-changed=src/letters_sets.txt");
    println!("cargo:rerun-if-changed=src/schemes.txt");

    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let mut f = std::fs::File::create(out_dir.join("catalogue.rs"))
        .expect("could not create file in OUT_DIR");

    let sets = Vec::from_iter(LETTERS_SETS.lines().filter(|l| !l.is_empty()).map(|line| {
        let mut fields = line.splitn(3, '|');
        let id = fields.next().expect("every letters set has an id");
        let description = fields.next().expect("every letters set has a description");
        let letters = fields.next().expect("every letters set has letters");
        (id, description, letters)
    }));

    let mut map = phf_codegen::Map::new();
    for &(id, description, letters) in &sets {
        // A leading `*` marks the wildcard set.
        let alphabet = if letters.starts_with('*') {
            "Alphabet::Any".to_string()
        } else {
            let mut seen = std::collections::HashSet::new();
            for c in letters.chars().flat_map(char::to_uppercase) {
                assert!(seen.insert(c), "letters set '{}' repeats '{}'", id, c);
            }
            format!("Alphabet::Only({:?})", letters)
        };
        map.entry(
            id,
            &format!(
                "LettersSet {{ id: {:?}, description: {:?}, alphabet: {} }}",
                id, description, alphabet
            ),
        );
    }
    writeln!(
        f,
        "static LETTERS_SETS: phf::Map<&'static str, LettersSet> = {};",
        map.build()
    )
    .unwrap();
    writeln!(f, "const LETTERS_SET_IDS: [&str; {}] = [", sets.len()).unwrap();
    for (id, _, _) in &sets {
        writeln!(f, "{:?},", id).unwrap();
    }
    writeln!(f, "];").unwrap();

    let schemes = Vec::from_iter(SCHEMES.lines().filter(|l| !l.is_empty()).map(|line| {
        line.split_once('|')
            .expect("every scheme is id + '|' + description")
    }));

    let mut map = phf_codegen::Map::new();
    for &(id, description) in &schemes {
        map.entry(
            id,
            &format!("Scheme {{ id: {:?}, description: {:?} }}", id, description),
        );
    }
    writeln!(
        f,
        "static SCHEMES: phf::Map<&'static str, Scheme> = {};",
        map.build()
    )
    .unwrap();
    writeln!(f, "const SCHEME_IDS: [&str; {}] = [", schemes.len()).unwrap();
    for (id, _) in &schemes {
        writeln!(f, "{:?},", id).unwrap();
    }
    write!(f, "];").unwrap();
}
