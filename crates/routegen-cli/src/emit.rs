//! Route-forest emitters
//!
//! Serializes the final route forest either as a TypeScript
//! route-configuration module (Angular-style `Routes` array with one
//! import per bound component) or as pretty-printed JSON.

use std::collections::HashMap;

use anyhow::{Context, Result};
use routegen::{relative_path, remove_extension, Route};

/// Renders the forest as a TypeScript route-configuration module
///
/// `import_from` is the directory the emitted file will live in; import
/// specifiers are computed relative to it and stripped of their
/// extension. Distinct files whose derived identifiers collide are
/// imported under aliased local bindings so every route references the
/// component from its own file.
pub fn typescript(routes: &[Route], import_from: &str) -> Result<String> {
    let imports = collect_imports(routes);

    let mut output = String::new();
    output.push_str("// Generated by routegen. Do not edit.\n");
    output.push_str("import { Routes } from '@angular/router';\n\n");

    for import in &imports.entries {
        let target = relative_path(import_from, &import.file).with_context(|| {
            format!("Cannot import \"{}\" from \"{import_from}\"", import.file)
        })?;
        let specifier = import_specifier(&target);
        if import.local == import.exported {
            output.push_str(&format!(
                "import {{ {} }} from '{specifier}';\n",
                import.exported
            ));
        } else {
            output.push_str(&format!(
                "import {{ {} as {} }} from '{specifier}';\n",
                import.exported, import.local
            ));
        }
    }

    output.push_str("\nexport const routes: Routes = [\n");
    for route in routes {
        write_route(&mut output, route, 1, &imports.local_by_file);
    }
    output.push_str("];\n");
    Ok(output)
}

/// Renders the forest as pretty-printed JSON
pub fn json(routes: &[Route]) -> Result<String> {
    serde_json::to_string_pretty(routes).context("Failed to serialize route forest")
}

struct Import {
    exported: String,
    local: String,
    file: String,
}

/// One import per distinct file, with collision-free local bindings
struct ImportTable {
    entries: Vec<Import>,
    local_by_file: HashMap<String, String>,
}

fn collect_imports(routes: &[Route]) -> ImportTable {
    let mut table = ImportTable {
        entries: Vec::new(),
        local_by_file: HashMap::new(),
    };
    collect_imports_into(routes, &mut table);
    table
}

fn collect_imports_into(routes: &[Route], table: &mut ImportTable) {
    for route in routes {
        for (identifier, file) in [
            (&route.component, &route.file),
            (&route.providers, &route.providers_file),
        ] {
            if let (Some(identifier), Some(file)) = (identifier, file) {
                add_import(table, identifier, file);
            }
        }
        collect_imports_into(&route.children, table);
    }
}

fn add_import(table: &mut ImportTable, identifier: &str, file: &str) {
    if table.local_by_file.contains_key(file) {
        return;
    }

    // Two files can derive the same identifier; alias later ones so the
    // emitted module still references each route's own file.
    let mut local = identifier.to_string();
    let mut suffix = 2;
    while table.entries.iter().any(|entry| entry.local == local) {
        local = format!("{identifier}{suffix}");
        suffix += 1;
    }

    table.local_by_file.insert(file.to_string(), local.clone());
    table.entries.push(Import {
        exported: identifier.to_string(),
        local,
        file: file.to_string(),
    });
}

/// Module specifiers must be explicitly relative for bundlers
fn import_specifier(target: &str) -> String {
    let stripped = remove_extension(target);
    if stripped.starts_with('.') {
        stripped
    } else {
        format!("./{stripped}")
    }
}

fn write_route(
    output: &mut String,
    route: &Route,
    depth: usize,
    local_by_file: &HashMap<String, String>,
) {
    let pad = "  ".repeat(depth);
    output.push_str(&format!("{pad}{{\n"));
    output.push_str(&format!("{pad}  path: '{}',\n", route.route));

    if let (Some(component), Some(file)) = (&route.component, &route.file) {
        let local = local_by_file.get(file).unwrap_or(component);
        output.push_str(&format!("{pad}  component: {local},\n"));
    }
    if let (Some(providers), Some(file)) = (&route.providers, &route.providers_file) {
        let local = local_by_file.get(file).unwrap_or(providers);
        output.push_str(&format!("{pad}  providers: [{local}],\n"));
    }

    if !route.children.is_empty() {
        output.push_str(&format!("{pad}  children: [\n"));
        for child in &route.children {
            write_route(output, child, depth + 2, local_by_file);
        }
        output.push_str(&format!("{pad}  ],\n"));
    }

    output.push_str(&format!("{pad}}},\n"));
}
