// Site endpoints
pub const SITE_BASE: &str = "https://www.legaseriea.it";

// Page titles that mean the roster page does not exist
// (relegated teams, renamed slugs)
pub const NOT_FOUND_MARKERS: &[&str] = &["404", "Non Trovata"];

// Output locations
pub const OUT_DIR: &str = "serie_a_full";
pub const ARCHIVE_NAME: &str = "serie_a_full_dataset.zip";
pub const OUTPUT_EXT: &str = "jpg";

// Image pipeline
pub const MAX_WIDTH: u32 = 500;
pub const MIN_DIMENSION: u32 = 100;
pub const JPEG_QUALITY: u8 = 80;

// Download configuration
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 5;
pub const USER_AGENT: &str = "Mozilla/5.0";

// Render settling: poll the rendered image count until it holds steady,
// giving the lazy loader a hard budget instead of blind sleeps
pub const SETTLE_POLL_MS: u64 = 500;
pub const SETTLE_STABLE_POLLS: u32 = 3;
pub const SETTLE_BUDGET_MS: u64 = 10_000;

/// One Serie A team: display name plus the slug used in roster URLs.
#[derive(Debug, Clone, Copy)]
pub struct Team {
    pub name: &'static str,
    pub slug: &'static str,
}

pub const TEAMS: &[Team] = &[
    Team { name: "Atalanta", slug: "atalanta" },
    Team { name: "Bologna", slug: "bologna" },
    Team { name: "Cagliari", slug: "cagliari" },
    Team { name: "Como", slug: "como" },
    Team { name: "Cremonese", slug: "cremonese" },
    Team { name: "Fiorentina", slug: "fiorentina" },
    Team { name: "Genoa", slug: "genoa" },
    Team { name: "Hellas Verona", slug: "hellas-verona" },
    Team { name: "Inter", slug: "inter" },
    Team { name: "Juventus", slug: "juventus" },
    Team { name: "Lazio", slug: "lazio" },
    Team { name: "Lecce", slug: "lecce" },
    Team { name: "Milan", slug: "milan" },
    Team { name: "Napoli", slug: "napoli" },
    Team { name: "Parma", slug: "parma" },
    Team { name: "Pisa", slug: "pisa" },
    Team { name: "Roma", slug: "roma" },
    Team { name: "Sassuolo", slug: "sassuolo" },
    Team { name: "Torino", slug: "torino" },
    Team { name: "Udinese", slug: "udinese" },
];

/// Build the roster page URL for a team slug.
pub fn roster_url(slug: &str) -> String {
    format!("{}/it/team/{}/squadra", SITE_BASE, slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_team_table_complete() {
        assert_eq!(TEAMS.len(), 20);
        let slugs: HashSet<&str> = TEAMS.iter().map(|t| t.slug).collect();
        assert_eq!(slugs.len(), TEAMS.len(), "duplicate team slug");
    }

    #[test]
    fn test_roster_url() {
        assert_eq!(
            roster_url("hellas-verona"),
            "https://www.legaseriea.it/it/team/hellas-verona/squadra"
        );
    }
}
