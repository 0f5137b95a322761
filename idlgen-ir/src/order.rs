//! Ordering of the definitions that share the types file.

use std::collections::HashSet;

use crate::{EnumDef, Program, RecordDef, TypeNode, TypedefDef};

/// A top-level definition that declares a type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeDecl<'a> {
    Typedef(&'a TypedefDef),
    Enum(&'a EnumDef),
    Record(&'a RecordDef),
}

impl<'a> TypeDecl<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            TypeDecl::Typedef(def) => &def.name,
            TypeDecl::Enum(def) => &def.name,
            TypeDecl::Record(def) => &def.name,
        }
    }

    /// Record names this declaration mentions.
    fn records(&self) -> Vec<&str> {
        let mut names = Vec::new();
        match self {
            TypeDecl::Typedef(def) => def.target.collect_records(&mut names),
            TypeDecl::Enum(_) => {}
            TypeDecl::Record(def) => {
                for field in &def.fields {
                    field.ty.collect_records(&mut names);
                }
            }
        }
        names
    }
}

impl TypeNode {
    fn collect_records<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeNode::Base(_) | TypeNode::Enum(_) => {}
            TypeNode::List(elem) | TypeNode::Set(elem) => elem.collect_records(names),
            TypeNode::Map { key, value } => {
                key.collect_records(names);
                value.collect_records(names);
            }
            TypeNode::Typedef { target, .. } => target.collect_records(names),
            TypeNode::Struct(name) => names.push(name),
        }
    }
}

impl Program {
    /// Typedefs, enums and records, each placed after the local records it
    /// names.
    ///
    /// The sort is stable: declarations keep category order (typedefs, enums,
    /// records) and then declaration order unless a dependency forces them
    /// later. Records that reference each other in a cycle, or themselves,
    /// stay in that base order.
    pub fn type_decls(&self) -> Vec<TypeDecl<'_>> {
        let mut pending: Vec<TypeDecl<'_>> = self
            .typedefs
            .iter()
            .map(TypeDecl::Typedef)
            .chain(self.enums.iter().map(TypeDecl::Enum))
            .chain(self.records.iter().map(TypeDecl::Record))
            .collect();
        let local: HashSet<&str> = self.records.iter().map(|r| r.name.as_str()).collect();
        let mut placed: HashSet<&str> = HashSet::new();
        let mut ordered = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let ready = pending.iter().position(|decl| {
                decl.records().into_iter().all(|name| {
                    name == decl.name() || !local.contains(name) || placed.contains(name)
                })
            });
            // A cycle: nothing is ready, so take the earliest remaining one.
            let decl = pending.remove(ready.unwrap_or(0));
            if let TypeDecl::Record(def) = decl {
                placed.insert(def.name.as_str());
            }
            ordered.push(decl);
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseType, EnumValue, Field};

    fn names(program: &Program) -> Vec<&str> {
        program.type_decls().iter().map(|d| d.name()).collect()
    }

    fn record(name: &str, refs: &[&str]) -> RecordDef {
        let fields = refs
            .iter()
            .zip(1..)
            .map(|(target, id)| {
                Field::new(id, format!("f{id}"), TypeNode::Struct(target.to_string()))
            })
            .collect();
        RecordDef::structure(name, fields)
    }

    #[test]
    fn test_category_order_without_dependencies() {
        let mut program = Program::new("p");
        program.typedefs.push(TypedefDef {
            name: "MyInteger".into(),
            target: TypeNode::base(BaseType::I32),
        });
        program.enums.push(EnumDef {
            name: "Operation".into(),
            values: vec![EnumValue {
                name: "ADD".into(),
                value: 1,
            }],
        });
        program.records.push(record("Work", &[]));

        assert_eq!(names(&program), vec!["MyInteger", "Operation", "Work"]);
    }

    #[test]
    fn test_typedef_of_record_follows_record() {
        let mut program = Program::new("p");
        program.typedefs.push(TypedefDef {
            name: "MyWork".into(),
            target: TypeNode::list(TypeNode::Struct("Work".into())),
        });
        program.typedefs.push(TypedefDef {
            name: "MyInteger".into(),
            target: TypeNode::base(BaseType::I32),
        });
        program.records.push(record("Work", &[]));

        assert_eq!(names(&program), vec!["MyInteger", "Work", "MyWork"]);
    }

    #[test]
    fn test_record_follows_records_it_contains() {
        let mut program = Program::new("p");
        program.records.push(record("Outer", &["Inner", "shared.SharedStruct"]));
        program.records.push(record("Inner", &[]));

        assert_eq!(names(&program), vec!["Inner", "Outer"]);
    }

    #[test]
    fn test_cycles_keep_declaration_order() {
        let mut program = Program::new("p");
        program.records.push(record("Node", &["Node"]));
        program.records.push(record("A", &["B"]));
        program.records.push(record("B", &["A"]));

        assert_eq!(names(&program), vec!["Node", "A", "B"]);
    }
}
