use std::{
    fs,
    io::{self, Read, Seek},
    path,
};

use crate::error::Error;

// open file for writing, if reuse is false, create file.
pub(crate) fn open_file_w(file: &str, reuse: bool) -> Result<fs::File, Error> {
    let p = path::Path::new(file);

    let mut opts = fs::OpenOptions::new();
    Ok(match reuse {
        false => {
            if let Some(parent) = p.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::remove_file(p).ok();
            opts.write(true).create_new(true).open(p)?
        }
        true => opts.write(true).truncate(true).create(true).open(p)?,
    })
}

// open file for reading.
pub(crate) fn open_file_r(file: &str) -> Result<fs::File, Error> {
    let p = path::Path::new(file);
    let mut opts = fs::OpenOptions::new();
    Ok(opts.read(true).open(p)?)
}

pub(crate) fn read_buffer(fd: &mut fs::File, fpos: u64, n: u64, msg: &str) -> Result<Vec<u8>, Error> {
    fd.seek(io::SeekFrom::Start(fpos))?;
    let mut buf = vec![0u8; n as usize];
    let got = fd.read(&mut buf)?;
    if got == buf.len() {
        Ok(buf)
    } else {
        Err(Error::TruncatedInput(format!(
            "{}: wanted {} bytes, got {}",
            msg,
            buf.len(),
            got
        )))
    }
}

/// Reverse `s` by Unicode scalar value, not by byte — a multi-byte UTF-8
/// sequence reversed byte-wise would no longer decode. Invalid UTF-8 is
/// reversed byte-wise as a fallback, which is still a bijection (so
/// suffix lookups stay consistent with what was indexed) even though the
/// result isn't meaningful text.
pub fn reverse_utf8(s: &[u8]) -> Vec<u8> {
    match std::str::from_utf8(s) {
        Ok(text) => text.chars().rev().collect::<String>().into_bytes(),
        Err(_) => s.iter().rev().copied().collect(),
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
