// Author: Dustin Pilgrim
// License: MIT

use crate::BrikError;
use crate::ast::{EnumDef, Expr, Item, Program, Section, StructDef};

mod conversion;

impl Program {
    /// Look up an assignment value by `key` (top level) or `section.key`.
    ///
    /// Keys may repeat; the last occurrence wins.
    ///
    /// # Examples
    /// ```
    /// let program = brik::parse("[board]\nwidth = 10\nwidth = 12").unwrap();
    /// assert_eq!(program.get("board.width").and_then(|v| v.as_number()), Some(12.0));
    /// ```
    pub fn get(&self, path: &str) -> Option<&Expr> {
        self.get_all(path).pop()
    }

    /// Every value bound to `path`, in source order.
    ///
    /// Section names and keys may themselves contain dots, so `path`
    /// matches a top-level key spelled exactly `path`, or any section
    /// whose name followed by `.` prefixes `path` with the rest naming
    /// a key in its body.
    pub fn get_all(&self, path: &str) -> Vec<&Expr> {
        let mut found = Vec::new();
        for item in &self.items {
            match item {
                Item::Assign(a) if a.key == path => found.push(&a.value),
                Item::Section(s) => {
                    let key = path
                        .strip_prefix(s.name.as_str())
                        .and_then(|rest| rest.strip_prefix('.'));
                    if let Some(key) = key {
                        found.extend(s.body.iter().filter(|a| a.key == key).map(|a| &a.value));
                    }
                }
                _ => {}
            }
        }
        found
    }

    /// Get a typed value, failing when the path is missing or has the wrong type.
    pub fn get_as<'a, T>(&'a self, path: &str) -> Result<T, BrikError>
    where
        T: TryFrom<&'a Expr, Error = BrikError>,
    {
        let value = self.get(path).ok_or_else(|| BrikError::MissingKey {
            path: path.to_string(),
            hint: Some("Check the section and key names".into()),
            code: Some(404),
        })?;
        T::try_from(value)
    }

    /// Get a typed value with a fallback default.
    ///
    /// # Examples
    /// ```
    /// let program = brik::parse("speed = 3").unwrap();
    /// assert_eq!(program.get_or("speed", 1_i64), 3);
    /// assert_eq!(program.get_or("board.height", 20_i64), 20);
    /// ```
    pub fn get_or<'a, T>(&'a self, path: &str, default: T) -> T
    where
        T: TryFrom<&'a Expr, Error = BrikError>,
    {
        self.get_as(path).unwrap_or(default)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.items.iter().filter_map(|item| match item {
            Item::Section(s) => Some(s),
            _ => None,
        })
    }

    /// First section called `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections().find(|s| s.name == name)
    }

    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.items.iter().find_map(|item| match item {
            Item::EnumDef(e) if e.name == name => Some(e),
            _ => None,
        })
    }

    pub fn struct_def(&self, name: &str) -> Option<&StructDef> {
        self.items.iter().find_map(|item| match item {
            Item::StructDef(s) if s.name == name => Some(s),
            _ => None,
        })
    }

    /// Number of assignments, top-level and inside sections.
    pub fn assignment_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                Item::Assign(_) => 1,
                Item::Section(s) => s.body.len(),
                _ => 0,
            })
            .sum()
    }
}

impl Section {
    /// Last value bound to `key` in this section.
    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.body.iter().rev().find(|a| a.key == key).map(|a| &a.value)
    }
}

impl EnumDef {
    pub fn value_of(&self, key: &str) -> Option<f64> {
        self.entries.iter().rev().find(|(k, _)| k == key).map(|(_, v)| *v)
    }
}

impl Expr {
    /// Last value of object field `name`.
    pub fn field(&self, name: &str) -> Option<&Expr> {
        self.as_object()?
            .iter()
            .rev()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }
}

#[cfg(test)]
mod tests;
