// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Binary STL decoding and encoding
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count
//! end
//! ```
//!
//! All values are little-endian.

use crate::error::{MeshError, MeshResult};
use crate::geometry::{Mesh, Triangle};
use crate::utils::math::Vec3;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

/// STL binary header size in bytes
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute)
pub const TRIANGLE_SIZE: usize = 50;

/// Most bytes read past the last record when checking for trailing data
const TRAILING_SCAN_LIMIT: u64 = 64 * 1024;

/// Expected file size for `count` triangles
pub fn expected_size(count: u32) -> u64 {
    (HEADER_SIZE + 4) as u64 + TRIANGLE_SIZE as u64 * count as u64
}

/// Load a mesh from a binary STL file
pub fn load_stl<P: AsRef<Path>>(path: P) -> MeshResult<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            MeshError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MeshError::Io(e)
        }
    })?;

    let mesh = read_stl(BufReader::new(file))?;
    log::info!("loaded {} triangles from {}", mesh.triangle_count(), path.display());
    Ok(mesh)
}

/// Decode a binary STL from any byte source
///
/// Either the whole mesh is returned or nothing is: on error the partially
/// filled triangle list is dropped before returning.
pub fn read_stl<R: Read>(mut reader: R) -> MeshResult<Mesh> {
    let mut header = [0u8; HEADER_SIZE];
    let got = read_full(&mut reader, &mut header)?;
    if got < HEADER_SIZE {
        return Err(MeshError::format(format!(
            "header is {} bytes, expected {}",
            got, HEADER_SIZE
        )));
    }

    let mut count_bytes = [0u8; 4];
    let got = read_full(&mut reader, &mut count_bytes)?;
    if got < count_bytes.len() {
        return Err(MeshError::format("triangle count is unreadable"));
    }
    let count = u32::from_le_bytes(count_bytes);
    if count == 0 {
        return Err(MeshError::format("triangle count is zero"));
    }

    let mut triangles = reserve_records(count as usize, count)?;

    let mut record = [0u8; TRIANGLE_SIZE];
    for index in 0..count as usize {
        let got = read_full(&mut reader, &mut record)?;
        if got < TRIANGLE_SIZE {
            return Err(MeshError::TruncatedData {
                index,
                expected: TRIANGLE_SIZE,
                actual: got,
            });
        }
        triangles.push(decode_triangle(&record));
    }

    let trailing = count_trailing(&mut reader)?;
    if trailing > 0 {
        let bound = if trailing >= TRAILING_SCAN_LIMIT { "at least " } else { "" };
        log::warn!(
            "{}{} trailing bytes after {} triangles (expected file size {})",
            bound,
            trailing,
            count,
            expected_size(count)
        );
    }

    Ok(Mesh::from_nonempty(triangles))
}

/// Encode a mesh as binary STL
///
/// The header is zero-filled apart from a short tag.
pub fn write_stl<W: Write>(mesh: &Mesh, mut writer: W) -> std::io::Result<()> {
    let mut header = [0u8; HEADER_SIZE];
    let tag = b"binary STL written by meshprobe";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    let count = u32::try_from(mesh.triangle_count())
        .map_err(|_| std::io::Error::new(ErrorKind::InvalidInput, "too many triangles for STL"))?;
    writer.write_all(&count.to_le_bytes())?;

    for triangle in mesh.triangles() {
        writer.write_all(&encode_triangle(triangle))?;
    }
    writer.flush()
}

/// Export a mesh to a binary STL file
pub fn export_stl<P: AsRef<Path>>(mesh: &Mesh, path: P) -> std::io::Result<()> {
    let file = File::create(path.as_ref())?;
    write_stl(mesh, BufWriter::new(file))?;
    log::info!("wrote {} triangles to {}", mesh.triangle_count(), path.as_ref().display());
    Ok(())
}

fn decode_triangle(record: &[u8; TRIANGLE_SIZE]) -> Triangle {
    let float = |i: usize| {
        let at = i * 4;
        f32::from_le_bytes([record[at], record[at + 1], record[at + 2], record[at + 3]])
    };
    let vec = |i: usize| Vec3::new(float(i), float(i + 1), float(i + 2));

    Triangle {
        normal: vec(0),
        v1: vec(3),
        v2: vec(6),
        v3: vec(9),
        attribute: u16::from_le_bytes([record[48], record[49]]),
    }
}

fn encode_triangle(triangle: &Triangle) -> [u8; TRIANGLE_SIZE] {
    let mut record = [0u8; TRIANGLE_SIZE];
    let vectors = [triangle.normal, triangle.v1, triangle.v2, triangle.v3];
    for (i, value) in vectors.iter().flat_map(|v| v.iter()).enumerate() {
        record[i * 4..i * 4 + 4].copy_from_slice(&value.to_le_bytes());
    }
    record[48..50].copy_from_slice(&triangle.attribute.to_le_bytes());
    record
}

/// Fill `buf` as far as the source allows, returning the byte count read
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Empty vector with room for `len` records, or `Allocation` for the declared `count`
fn reserve_records(len: usize, count: u32) -> MeshResult<Vec<Triangle>> {
    let mut triangles = Vec::new();
    triangles
        .try_reserve_exact(len)
        .map_err(|_| MeshError::Allocation { count })?;
    Ok(triangles)
}

/// Bytes left in `reader`, counted up to [`TRAILING_SCAN_LIMIT`]
fn count_trailing<R: Read>(reader: &mut R) -> std::io::Result<u64> {
    std::io::copy(&mut reader.take(TRAILING_SCAN_LIMIT), &mut std::io::sink())
}
