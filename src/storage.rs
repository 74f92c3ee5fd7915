use crate::model::Session;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge une session depuis un support.
    fn load(&self) -> anyhow::Result<Session>;
    /// Sauvegarde de manière atomique.
    fn save(&self, session: &Session) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self { path: path.as_ref().to_path_buf() })
    }

    /// Session du fichier, ou session vierge si le fichier n'existe pas
    /// encore. Un fichier présent mais illisible reste une erreur.
    pub fn load_or_default(&self) -> anyhow::Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        self.load()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Session> {
        let data = fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let session: Session = serde_json::from_slice(&data).with_context(|| "parsing session.json")?;
        Ok(session)
    }

    fn save(&self, session: &Session) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(session)?;
        let mut tmp = NamedTempFile::new_in(
            self.path.parent().unwrap_or_else(|| Path::new(".")))
            .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
