//! Member roster: application ID → name / year / role.
//!
//! The roster is read once from a CSV file with a header row. Header names are
//! trimmed; rows without an `App ID` are ignored and unreadable rows are skipped.

use crate::errors::AppResult;
use crate::models::MemberRecord;
use crate::ui::messages::{success, warning};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

pub const COL_APP_ID: &str = "App ID";
pub const COL_NAME: &str = "Name";
pub const COL_YEAR: &str = "Year";
pub const COL_ROLE: &str = "Role";

#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: HashMap<String, MemberRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let index_of = |name: &str| headers.iter().position(|h| h == name);

        let Some(app_id_col) = index_of(COL_APP_ID) else {
            return Ok(Self::new());
        };
        let name_col = index_of(COL_NAME);
        let year_col = index_of(COL_YEAR);
        let role_col = index_of(COL_ROLE);

        let mut roster = Self::new();
        for result in rdr.records() {
            let Ok(record) = result else {
                continue;
            };
            let field = |col: Option<usize>| {
                col.and_then(|c| record.get(c))
                    .unwrap_or_default()
                    .to_string()
            };

            let app_id = field(Some(app_id_col));
            if app_id.is_empty() {
                continue;
            }

            // ID duplicati: vince l'ultima riga
            roster.insert(MemberRecord {
                app_id,
                name: field(name_col),
                year: field(year_col),
                role: field(role_col),
            });
        }

        Ok(roster)
    }

    pub fn insert(&mut self, member: MemberRecord) {
        self.members.insert(member.app_id.clone(), member);
    }

    pub fn get(&self, app_id: &str) -> Option<&MemberRecord> {
        self.members.get(app_id)
    }

    /// Never fails: unknown IDs resolve to the "Unknown" sentinel.
    pub fn lookup(&self, app_id: &str) -> MemberRecord {
        self.get(app_id)
            .cloned()
            .unwrap_or_else(|| MemberRecord::unknown(app_id))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Roster shared with the request handlers.
///
/// Starts empty and is filled once by [`spawn_load`]. Requests served before
/// the load finishes see every member as "Unknown".
#[derive(Debug, Default)]
pub struct RosterHandle {
    inner: RwLock<Roster>,
}

impl RosterHandle {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn loaded(roster: Roster) -> Self {
        Self {
            inner: RwLock::new(roster),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Roster> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, roster: Roster) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = roster;
    }
}

/// Reads the roster file once, synchronously. A missing or unreadable file
/// gives an empty roster and a warning.
pub fn load_or_empty(path: &Path) -> Roster {
    match Roster::from_path(path) {
        Ok(roster) => {
            success(format!(
                "Member data loaded from {}. Total members: {}",
                path.display(),
                roster.len()
            ));
            roster
        }
        Err(e) => {
            warning(format!(
                "Could not load member roster {}: {e}",
                path.display()
            ));
            Roster::new()
        }
    }
}

/// Loads the roster on the blocking pool without holding up the caller.
/// Not retried on failure.
pub fn spawn_load(handle: Arc<RosterHandle>, path: PathBuf) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let roster = load_or_empty(&path);
        handle.set(roster);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "\
 App ID ,Name,Year, Role
101,Ananya Rao,2nd,Avionics Lead
102,Kabir Shah,1st,Member
,Nobody,3rd,Ghost
103,Meera Iyer
";

    #[test]
    fn headers_are_trimmed_and_rows_indexed_by_app_id() {
        let roster = Roster::from_reader(ROSTER.as_bytes()).unwrap();

        let m = roster.lookup("101");
        assert_eq!(m.name, "Ananya Rao");
        assert_eq!(m.year, "2nd");
        assert_eq!(m.role, "Avionics Lead");
    }

    #[test]
    fn rows_without_app_id_are_ignored() {
        let roster = Roster::from_reader(ROSTER.as_bytes()).unwrap();
        assert_eq!(roster.len(), 3);
        assert!(roster.get("").is_none());
    }

    #[test]
    fn short_rows_keep_missing_columns_empty() {
        let roster = Roster::from_reader(ROSTER.as_bytes()).unwrap();
        let m = roster.lookup("103");
        assert_eq!(m.name, "Meera Iyer");
        assert_eq!(m.year, "");
        assert_eq!(m.role, "");
    }

    #[test]
    fn unknown_id_resolves_to_sentinel() {
        let roster = Roster::from_reader(ROSTER.as_bytes()).unwrap();
        let m = roster.lookup("999");
        assert_eq!(m.app_id, "999");
        assert_eq!(
            (m.name.as_str(), m.year.as_str(), m.role.as_str()),
            ("Unknown", "Unknown", "Unknown")
        );
        assert!(m.is_unknown());
    }

    #[test]
    fn byte_order_mark_does_not_hide_first_header() {
        let data = "\u{feff}App ID,Name,Year,Role\n7,Dev,4th,Member\n";
        let roster = Roster::from_reader(data.as_bytes()).unwrap();
        assert_eq!(roster.lookup("7").name, "Dev");
    }

    #[test]
    fn missing_file_gives_empty_roster() {
        let roster = load_or_empty(Path::new("/definitely/not/here/Member-log.csv"));
        assert!(roster.is_empty());
    }

    #[test]
    fn handle_starts_empty() {
        let handle = RosterHandle::empty();
        assert!(handle.read().lookup("101").is_unknown());
    }

    #[tokio::test]
    async fn background_load_fills_the_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Member-log.csv");
        std::fs::write(&path, ROSTER).unwrap();

        let handle = Arc::new(RosterHandle::empty());
        spawn_load(handle.clone(), path).await.unwrap();

        assert_eq!(handle.read().lookup("102").name, "Kabir Shah");
    }
}
