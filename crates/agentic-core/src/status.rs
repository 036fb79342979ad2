use crate::error::Result;
use crate::paths;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Installed,
    Empty,
    Missing,
}

impl ComponentState {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentState::Installed => "Installed",
            ComponentState::Empty => "Empty",
            ComponentState::Missing => "Missing",
        }
    }
}

impl std::fmt::Display for ComponentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStatus {
    pub category: Category,
    pub state: ComponentState,
    pub count: usize,
    pub description: String,
}

/// Inspect the installed components under `target_root` (the `.claude`
/// directory), one row per category.
pub fn inspect(target_root: &Path) -> Result<Vec<ComponentStatus>> {
    Category::all()
        .iter()
        .map(|&category| {
            let dir = target_root.join(category.dir_name());
            let (state, count) = if dir.is_dir() {
                let count = count_component_files(&dir, category)?;
                let state = if count > 0 {
                    ComponentState::Installed
                } else {
                    ComponentState::Empty
                };
                (state, count)
            } else {
                (ComponentState::Missing, 0)
            };
            Ok(ComponentStatus {
                category,
                state,
                count,
                description: category.description().to_string(),
            })
        })
        .collect()
}

/// True when at least one component has installed files.
pub fn is_ready(statuses: &[ComponentStatus]) -> bool {
    statuses.iter().any(|s| s.count > 0)
}

fn count_component_files(dir: &Path, category: Category) -> Result<usize> {
    let count = match category {
        Category::Commands => count_files(dir, true, &|name: &str| name.ends_with(".md"))?,
        Category::Agents => count_files(dir, false, &|name: &str| name.ends_with(".md"))?,
        Category::Templates => count_files(dir, true, &|_: &str| true)?,
        Category::Skills => count_files(dir, true, &|name: &str| name == paths::SKILL_FILE)?,
    };
    Ok(count)
}

fn count_files(dir: &Path, recursive: bool, matches: &dyn Fn(&str) -> bool) -> Result<usize> {
    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            if recursive {
                count += count_files(&entry.path(), recursive, matches)?;
            }
        } else if matches(&entry.file_name().to_string_lossy()) {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let p = root.join(rel);
        std::fs::create_dir_all(p.parent().unwrap()).unwrap();
        std::fs::write(p, "x").unwrap();
    }

    fn row(statuses: &[ComponentStatus], c: Category) -> &ComponentStatus {
        statuses.iter().find(|s| s.category == c).unwrap()
    }

    #[test]
    fn missing_root_reports_everything_missing() {
        let dir = TempDir::new().unwrap();
        let statuses = inspect(&dir.path().join(".claude")).unwrap();
        assert_eq!(statuses.len(), 4);
        assert!(statuses.iter().all(|s| s.state == ComponentState::Missing));
        assert!(!is_ready(&statuses));
    }

    #[test]
    fn counts_follow_category_rules() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "commands/all.md");
        touch(root, "commands/sub/extra.md");
        touch(root, "commands/notes.txt");
        touch(root, "agents/reviewer.md");
        touch(root, "agents/nested/ignored.md");
        touch(root, "skills/code-standards/SKILL.md");
        touch(root, "skills/code-standards/examples/x.ts");
        std::fs::create_dir_all(root.join("templates")).unwrap();

        let statuses = inspect(root).unwrap();
        assert_eq!(row(&statuses, Category::Commands).count, 2);
        assert_eq!(row(&statuses, Category::Agents).count, 1);
        assert_eq!(row(&statuses, Category::Skills).count, 1);
        let templates = row(&statuses, Category::Templates);
        assert_eq!(templates.state, ComponentState::Empty);
        assert_eq!(templates.count, 0);
        assert_eq!(
            row(&statuses, Category::Commands).state,
            ComponentState::Installed
        );
        assert!(is_ready(&statuses));
    }
}
