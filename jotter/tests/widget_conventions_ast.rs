use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

/// Text that must never appear in a pure view module.
const FORBIDDEN_PATTERNS: &[(&str, &str)] = &[
    ("crate::app::", "widgets must not depend on the app event loop"),
    ("crate::state::", "widgets must receive environment through props"),
    ("crate::guards::", "widgets must not classify events"),
    ("log::", "widgets must not log"),
    ("std::fs::", "widgets must not touch the filesystem"),
    ("tokio::spawn", "widgets must not spawn work"),
    ("Task::", "widgets must not return tasks"),
    ("iced::Task", "widgets must not return tasks"),
    ("Instant::now", "widgets must not read the clock"),
    (".elapsed(", "widgets must not read the clock"),
    ("SystemTime", "widgets must not read the clock"),
];

/// Feature internals widgets must reach only through re-exports.
const FEATURE_INTERNALS: &[&str] =
    &["::event::", "::state::", "::model::", "::storage::", "::errors::"];

#[test]
fn given_ui_widgets_when_validating_conventions_then_all_modules_comply() {
    let widgets_dir =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/ui/widgets");
    let mut violations = Vec::new();

    let declared = declared_modules(&widgets_dir, &mut violations);
    let on_disk = modules_on_disk(&widgets_dir, &mut violations);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared modules {declared:?} do not match files {on_disk:?}",
            widgets_dir.join("mod.rs").display()
        ));
    }

    for module in &declared {
        let path = widgets_dir.join(format!("{module}.rs"));
        validate_widget(&path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_snake_case_stems_when_converted_then_prefix_is_pascal_case() {
    assert_eq!(pascal_case("sidebar_item"), "SidebarItem");
    assert_eq!(pascal_case("toast_stack"), "ToastStack");
    assert_eq!(pascal_case("navbar"), "Navbar");
}

fn declared_modules(
    dir: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mod_rs = dir.join("mod.rs");
    let file = parse(&mod_rs);
    let mut declared = BTreeSet::new();

    for item in &file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module '{}' must be declared as pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard imports are forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    declared
}

fn modules_on_disk(
    dir: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", dir.display())
    });
    let mut modules = BTreeSet::new();

    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();
        if path.is_dir() {
            violations.push(format!(
                "{}: widgets live in a flat directory",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = file_stem(&path);
        if stem != "mod" {
            modules.insert(stem);
        }
    }

    modules
}

fn validate_widget(path: &Path, violations: &mut Vec<String>) {
    let source = read_source(path);
    let file = parse(path);
    let prefix = pascal_case(&file_stem(path));

    for (pattern, reason) in FORBIDDEN_PATTERNS {
        if source.contains(pattern) {
            violations
                .push(format!("{}: {reason} ({pattern})", path.display()));
        }
    }
    for line in source.lines() {
        if line.contains("crate::features::")
            && FEATURE_INTERNALS.iter().any(|internal| line.contains(internal))
        {
            violations.push(format!(
                "{}: feature internals must be imported via re-exports: {line}",
                path.display()
            ));
        }
    }

    let mut views = 0usize;
    let mut props = Vec::new();
    let mut events = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    views += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props.push(name);
                }
            },
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") {
                    events.push(name);
                }
            },
            Item::Type(item_type) => {
                let name = item_type.ident.to_string();
                if name.ends_with("Event") {
                    events.push(name);
                }
            },
            Item::Use(item_use) if has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard imports are forbidden",
                    path.display()
                ));
            },
            _ => {},
        }
    }

    if views != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {views}",
            path.display()
        ));
    }
    for (kind, names) in [("Props", &props), ("Event", &events)] {
        if names.len() != 1 {
            violations.push(format!(
                "{}: expected exactly one *{kind} type, found {}",
                path.display(),
                names.len()
            ));
        }
        for name in names.iter() {
            if name != &format!("{prefix}{kind}") {
                violations.push(format!(
                    "{}: '{name}' must be named '{prefix}{kind}'",
                    path.display()
                ));
            }
        }
    }
}

fn read_source(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read_source(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

fn has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(has_glob),
        UseTree::Path(path) => has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
