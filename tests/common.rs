#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DAY: &str = "19-10-2026";

pub const ROSTER_CSV: &str = "\
App ID , Name ,Year,Role
101,Ananya Rao,2nd,Avionics Lead
102,Kabir Shah,1st,Member
";

/// Two submissions: 101 with two lectures, then an unknown member with one.
pub const SAMPLE_LOG: &str = r#"[
  {
    "id": 1760860800000,
    "submittedAt": "2026-10-19T08:00:00.000Z",
    "personal": { "name": "A", "app_id": "101" },
    "lectures": [
      { "course": "C1", "faculty": "F1", "startTime": "09:00", "endTime": "10:00" },
      { "course": "C2", "faculty": "F2", "startTime": "10:00", "endTime": "11:00" }
    ],
    "reason": "R"
  },
  {
    "id": 1760860900000,
    "submittedAt": "2026-10-19T08:01:40.000Z",
    "personal": { "name": "Z", "app_id": "999" },
    "lectures": [
      { "course": "C3", "faculty": "F3", "startTime": "14:00", "endTime": "15:00" }
    ],
    "reason": "Launch prep"
  }
]"#;

pub fn exl() -> Command {
    cargo_bin_cmd!("exemptlog")
}

/// Isolated config + roster + lists dir inside a temp dir.
pub struct Workspace {
    pub dir: TempDir,
    pub config: PathBuf,
    pub lists: PathBuf,
    pub roster: PathBuf,
}

impl Workspace {
    pub fn config_arg(&self) -> String {
        self.config.to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }

    pub fn log_path(&self, date: &str) -> PathBuf {
        self.lists.join(format!("exemption_requests_{date}.json"))
    }

    pub fn xlsx_path(&self, date: &str) -> PathBuf {
        self.lists.join(format!("Test Exemption list ({date}).xlsx"))
    }

    pub fn write_log(&self, date: &str, json: &str) {
        fs::create_dir_all(&self.lists).expect("create lists dir");
        fs::write(self.log_path(date), json).expect("write daily log");
    }
}

pub fn setup_workspace() -> Workspace {
    let dir = tempfile::tempdir().expect("tempdir");
    let lists = dir.path().join("lists");
    let roster = dir.path().join("Member-log.csv");
    let config = dir.path().join("exemptlog.conf");

    fs::write(&roster, ROSTER_CSV).expect("write roster");
    fs::write(
        &config,
        format!(
            "roster_file: {}\nlists_dir: {}\nstatic_dir: {}\nexport_title: Test Exemption list\n",
            roster.display(),
            lists.display(),
            dir.path().display()
        ),
    )
    .expect("write config");

    Workspace {
        dir,
        config,
        lists,
        roster,
    }
}
