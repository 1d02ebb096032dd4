use crate::level::LevelReport;
use crate::models::{CatalogEntry, SkillResponse};

pub fn help_response(entry: &CatalogEntry) -> SkillResponse {
    SkillResponse::plain(entry.help_text.as_str(), false)
}

pub fn stop_response(entry: &CatalogEntry) -> SkillResponse {
    SkillResponse::plain(entry.stop_text.as_str(), true)
}

pub fn unknown_response(entry: &CatalogEntry) -> SkillResponse {
    SkillResponse::plain(entry.unknown_text.as_str(), true)
}

pub fn level_response(report: &LevelReport) -> SkillResponse {
    SkillResponse::plain(report.sentence(), true)
}
