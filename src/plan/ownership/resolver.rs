//! Apply ownership resolutions to a section list

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use super::analyzer::FileOwnershipConflict;
use super::resolution::Resolution;
use crate::models::section::{FileAction, FileChange, Section};
use crate::plan::error::PlanError;
use crate::plan::graph::find_section_cycles;

const EXTRACTED_PREFIX: &str = "shared";
const MAX_SLUG_LEN: usize = 100;

/// Return a copy of `sections` with every conflict's resolution applied.
///
/// The input is never modified. Conflicts are applied in order, so an
/// extracted section from an earlier conflict is visible to later ones.
pub fn resolve_ownership_conflicts(
    sections: &[Section],
    conflicts: &[FileOwnershipConflict],
) -> Result<Vec<Section>, PlanError> {
    let mut resolved = sections.to_vec();

    for conflict in conflicts {
        match &conflict.resolution {
            Resolution::AddDependency {
                section,
                depends_on,
            } => {
                add_dependency(&mut resolved, section, depends_on)?;
                if let Some(cycle) = find_section_cycles(&resolved)
                    .and_then(|cycles| cycles.into_iter().next())
                {
                    return Err(PlanError::CyclicResolution {
                        directive: conflict.resolution.to_string(),
                        cycle,
                    });
                }
                debug!(section, depends_on, file = %conflict.file, "added ordering dependency");
            }
            Resolution::Extract => {
                let id = extract_shared_file(&mut resolved, conflict)?;
                if let Some(cycle) = find_section_cycles(&resolved)
                    .and_then(|cycles| cycles.into_iter().next())
                {
                    return Err(PlanError::CyclicResolution {
                        directive: conflict.resolution.to_string(),
                        cycle,
                    });
                }
                info!(file = %conflict.file, extracted = %id, "extracted shared file into new section");
            }
        }
    }

    Ok(resolved)
}

fn position(sections: &[Section], id: &str) -> Result<usize, PlanError> {
    sections
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| PlanError::UnknownSection(id.to_string()))
}

fn add_dependency(sections: &mut [Section], section: &str, depends_on: &str) -> Result<(), PlanError> {
    let dependent = position(sections, section)?;
    let dependency = position(sections, depends_on)?;

    sections[dependent].add_dependency(depends_on);
    sections[dependency].add_dependent(section);
    Ok(())
}

/// Move `conflict.file` out of its writers into a new section they all
/// depend on. Returns the new section's ID.
///
/// Writers left out of the conflict are already ordered with every
/// conflicting writer. Those that run before all of them become
/// dependencies of the new section; the rest already run after it.
fn extract_shared_file(
    sections: &mut Vec<Section>,
    conflict: &FileOwnershipConflict,
) -> Result<String, PlanError> {
    let writers = conflict
        .sections
        .iter()
        .map(|id| position(sections, id))
        .collect::<Result<Vec<_>, _>>()?;

    let change = writers
        .iter()
        .find_map(|&i| sections[i].files.iter().find(|f| f.path == conflict.file))
        .cloned()
        .unwrap_or_else(|| FileChange::new(&conflict.file, FileAction::Modify));

    let id = unique_id(sections, &slugify(&conflict.file));
    let mut shared = Section::new(&id, &format!("Shared: {}", conflict.file));
    shared.description = Some(format!(
        "Owns {} on behalf of {}",
        conflict.file,
        conflict.sections.join(", ")
    ));
    shared.files.push(change);

    let view: &[Section] = sections;
    let upstream: Vec<usize> = view
        .iter()
        .enumerate()
        .filter(|(_, s)| s.touches(&conflict.file) && !conflict.sections.contains(&s.id))
        .filter(|(_, s)| {
            conflict
                .sections
                .iter()
                .all(|w| depends_transitively(view, w, &s.id))
        })
        .map(|(i, _)| i)
        .collect();
    for i in upstream {
        shared.add_dependency(&sections[i].id);
        sections[i].add_dependent(&id);
    }

    for &i in &writers {
        let writer = &mut sections[i];
        writer.files.retain(|f| f.path != conflict.file);
        writer.add_dependency(&id);
        shared.add_dependent(&writer.id);
    }

    sections.push(shared);
    Ok(id)
}

/// Whether `section` reaches `dependency` along declared dependencies
fn depends_transitively(sections: &[Section], section: &str, dependency: &str) -> bool {
    let deps: HashMap<&str, &[String]> = sections
        .iter()
        .map(|s| (s.id.as_str(), s.dependencies.as_slice()))
        .collect();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![section];

    while let Some(current) = stack.pop() {
        for next in deps.get(current).copied().unwrap_or_default() {
            if next.as_str() == dependency {
                return true;
            }
            if visited.insert(next.as_str()) {
                stack.push(next.as_str());
            }
        }
    }

    false
}

/// `shared-<path>` with every run of non-alphanumerics collapsed to `-`
fn slugify(file: &str) -> String {
    let mut slug = String::new();
    for c in file.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        EXTRACTED_PREFIX.to_string()
    } else {
        format!("{EXTRACTED_PREFIX}-{slug}")
    }
}

fn unique_id(sections: &[Section], base: &str) -> String {
    let taken = |id: &str| sections.iter().any(|s| s.id == id);
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
