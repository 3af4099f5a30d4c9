// src/source.rs
//
// Where the leaderboard page text comes from.

use std::{fs, path::PathBuf};

use log::info;

use crate::config::consts::{HOST, PORT};
use crate::config::options::PageQuery;
use crate::core::net;
use crate::error::Result;

/// One-shot provider of raw page text.
pub trait PageSource {
    fn fetch(&self) -> Result<String>;
}

/// Live leaderboard over HTTP.
///
/// The museum pages are behind login, so `cookie` normally needs a valid
/// session (`PHPSESSID=…`).
#[derive(Clone, Debug)]
pub struct HttpSource {
    pub host: String,
    pub port: u16,
    pub query: PageQuery,
    pub cookie: Option<String>,
}

impl HttpSource {
    pub fn new(query: PageQuery) -> Self {
        Self { host: s!(HOST), port: PORT, query, cookie: None }
    }
}

impl PageSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        let path = self.query.to_path();
        info!("Fetching {}{}", self.host, path);
        net::http_get(&self.host, self.port, &path, self.cookie.as_deref())
    }
}

/// A page saved to disk earlier.
#[derive(Clone, Debug)]
pub struct FileSource(pub PathBuf);

impl PageSource for FileSource {
    fn fetch(&self) -> Result<String> {
        info!("Reading {}", self.0.display());
        Ok(fs::read_to_string(&self.0)?)
    }
}

impl PageSource for str {
    fn fetch(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl PageSource for String {
    fn fetch(&self) -> Result<String> {
        Ok(self.clone())
    }
}
