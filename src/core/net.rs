// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Plain HTTP GET; returns the body.
///
/// HTTP/1.0 so the server closes the connection at the end and never
/// answers chunked. `cookie` is sent verbatim as the `Cookie` header.
pub fn http_get(host: &str, port: u16, path: &str, cookie: Option<&str>) -> Result<String> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;

    let req = build_request(host, path, cookie);
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    split_body(&String::from_utf8_lossy(&buf))
}

fn build_request(host: &str, path: &str, cookie: Option<&str>) -> String {
    let mut req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n",
        path, host, USER_AGENT
    );
    if let Some(c) = cookie {
        req.push_str(&join!("Cookie: ", c, "\r\n"));
    }
    req.push_str("\r\n");
    req
}

/// Check the status line, return everything after the header block.
fn split_body(resp: &str) -> Result<String> {
    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains(" 200") {
        return Err(Error::Http { status: s!(status) });
    }
    let body_idx = resp.find("\r\n\r\n").ok_or(Error::MalformedResponse)? + 4;
    Ok(resp[body_idx..].to_string())
}
