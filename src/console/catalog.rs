//! The catalog of named example scripts
//!
//! A [`ProgramCatalog`] is fixed once built: entries keep the order they were
//! declared in (that order is what the script menu shows), and names are
//! unique. Lookups go through an index so `get` does not scan the list.

use super::errors::ConsoleError;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// File extension picked up by [`ProgramCatalog::with_scripts_from`]
pub const SCRIPT_EXTENSION: &str = "lox";

/// Name of the script selected at startup when none is configured
pub const DEFAULT_PROGRAM: &str = "Hello World";

/// Scripts bundled with the console, in menu order
const BUILTIN_PROGRAMS: &[(&str, &str)] = &[
    ("Hello World", r#"print "Hello World!";"#),
    (
        "Loops",
        r#"fun triangle(num) {
  for(var i = 0; i < num; i = i + 1) {
    var stars = "";
    var spaces = "";
    for(var j = i; j < num; j = j + 1) {
      spaces = spaces + " ";
    }
    for(var j = 0; j <= i; j = j + 1) {
      stars = stars + "* ";
    }
    print spaces + stars;
  }
}

triangle(20);
"#,
    ),
    (
        "Fibonacci",
        r#"fun fib(num) {
  if (num < 2) {
    return num;
  }

  return fib(num - 1) + fib(num - 2);
}

print fib(20);
"#,
    ),
    (
        "Factors",
        r#"fun remainder(num, divisor) {
  while(num - divisor >= 0) {
    num = num - divisor;
  }
  return num;
}

fun prime_factors(num) {
  var i = 2;
  while (num > i * i) {
    while (remainder(num, i) == 0) {
      num = num / i;
      print i;
    }
    i = i + 1;
  }
  if (num > 1) {
    print num;
  }
}

prime_factors(6300);
"#,
    ),
    (
        "Closures",
        r#"fun fib_gen() {
  var a = 0;
  var b = 1;
  fun fib() {
    var current = a;
    a = b;
    b = current + b;
    return current;
  }
  return fib;
}

var fib = fib_gen();

for (var i = 0; i <= 20; i = i + 1) {
  print fib();
}
"#,
    ),
];

/// One named script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub name: String,
    pub source: String,
}

impl ScriptEntry {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        ScriptEntry {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Insertion-ordered, name-unique collection of scripts
#[derive(Debug, Clone, Default)]
pub struct ProgramCatalog {
    entries: Vec<ScriptEntry>,
    index: FxHashMap<String, usize>,
}

impl ProgramCatalog {
    /// Build a catalog from entries in menu order.
    /// Fails with [`ConsoleError::DuplicateName`] if a name repeats.
    pub fn new(entries: impl IntoIterator<Item = ScriptEntry>) -> Result<Self, ConsoleError> {
        let mut catalog = ProgramCatalog::default();
        for entry in entries {
            catalog.push(entry)?;
        }
        Ok(catalog)
    }

    /// The scripts bundled with the console
    pub fn builtin() -> Self {
        let mut catalog = ProgramCatalog::default();
        for (name, source) in BUILTIN_PROGRAMS {
            catalog.entries.push(ScriptEntry::new(*name, *source));
            catalog.index.insert(name.to_string(), catalog.entries.len() - 1);
        }
        catalog
    }

    /// Append every `*.lox` file in `dir`, sorted by file name and named by
    /// file stem.
    pub fn with_scripts_from(mut self, dir: &Path) -> Result<Self, ConsoleError> {
        let io_err = |source| ConsoleError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            let Some(name) = path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
            else {
                continue;
            };
            let source = fs::read_to_string(&path).map_err(|source| ConsoleError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(name = %name, path = %path.display(), "loaded script");
            self.push(ScriptEntry::new(name, source))?;
        }

        Ok(self)
    }

    fn push(&mut self, entry: ScriptEntry) -> Result<(), ConsoleError> {
        if self.index.contains_key(&entry.name) {
            return Err(ConsoleError::DuplicateName(entry.name));
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// All entries in declared order
    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    /// Names in declared order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Source text for `name`
    pub fn get(&self, name: &str) -> Result<&str, ConsoleError> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].source.as_str())
            .ok_or_else(|| ConsoleError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let catalog = ProgramCatalog::builtin();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            vec!["Hello World", "Loops", "Fibonacci", "Factors", "Closures"]
        );
        assert_eq!(
            catalog.get("Hello World").unwrap(),
            r#"print "Hello World!";"#
        );
    }

    #[test]
    fn test_get_missing_name() {
        let catalog = ProgramCatalog::builtin();
        match catalog.get("Quicksort") {
            Err(ConsoleError::NotFound(name)) => assert_eq!(name, "Quicksort"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = ProgramCatalog::new(vec![
            ScriptEntry::new("a", "print 1;"),
            ScriptEntry::new("b", "print 2;"),
            ScriptEntry::new("a", "print 3;"),
        ]);
        assert!(matches!(result, Err(ConsoleError::DuplicateName(name)) if name == "a"));
    }

    #[test]
    fn test_custom_order_is_preserved() {
        let catalog = ProgramCatalog::new(vec![
            ScriptEntry::new("zeta", "print 1;"),
            ScriptEntry::new("alpha", "print 2;"),
        ])
        .unwrap();
        assert_eq!(catalog.entries()[0].name, "zeta");
        assert_eq!(catalog.get("alpha").unwrap(), "print 2;");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_scripts_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_second.lox"), "print 2;").unwrap();
        fs::write(dir.path().join("a_first.lox"), "print 1;").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = ProgramCatalog::builtin()
            .with_scripts_from(dir.path())
            .unwrap();
        let names: Vec<&str> = catalog.names().skip(5).collect();
        assert_eq!(names, vec!["a_first", "b_second"]);
        assert_eq!(catalog.get("a_first").unwrap(), "print 1;");
    }

    #[test]
    fn test_directory_name_clash_with_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Loops.lox"), "print 0;").unwrap();

        let result = ProgramCatalog::builtin().with_scripts_from(dir.path());
        assert!(matches!(result, Err(ConsoleError::DuplicateName(name)) if name == "Loops"));
    }

    #[test]
    fn test_missing_directory() {
        let result = ProgramCatalog::builtin().with_scripts_from(Path::new("/no/such/dir"));
        assert!(matches!(result, Err(ConsoleError::Io { .. })));
    }
}
