//! General statistic placement loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::placement::StatPlacement;

/// Statistics screen structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatPlacementFile {
    pub statistics: Vec<StatPlacement>,
}

/// Loader for general statistic placements from RON files.
pub struct StatPlacementLoader;

impl StatPlacementLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<StatPlacement>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses placements. A repeated stat id keeps its last entry.
    pub fn parse(content: &str) -> LoadResult<Vec<StatPlacement>> {
        let file: StatPlacementFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse statistic placements RON: {}", e))?;

        let mut placements: Vec<StatPlacement> = Vec::with_capacity(file.statistics.len());
        for placement in file.statistics {
            placements.retain(|existing| existing.stat_id != placement.stat_id);
            placements.push(placement);
        }

        Ok(placements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::StatFormat;

    #[test]
    fn format_defaults_and_duplicates() {
        let placements = StatPlacementLoader::parse(
            r#"(
                statistics: [
                    (stat_id: "blackblock:votes", name: "Votes", icon: "minecraft:paper"),
                    (stat_id: "blackblock:afk_time", name: "Time AFK", icon: "minecraft:clock",
                        format: time),
                    (stat_id: "blackblock:votes", name: "Server Votes", icon: "minecraft:paper"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].format, StatFormat::Time);
        assert_eq!(placements[1].name, "Server Votes");
        assert_eq!(placements[1].format, StatFormat::Default);
    }
}
