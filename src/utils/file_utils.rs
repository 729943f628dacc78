use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::path::Path;

/// Memory-map a GeoPIXE file read-only.
///
/// An empty file cannot be mapped on every platform, so it is reported as
/// `UnexpectedEof` rather than surfacing the platform error.
pub fn read_binary_file_mmap(path: impl AsRef<Path>) -> io::Result<Mmap> {
    let file = File::open(path.as_ref())?;
    if file.metadata()?.len() == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{} is empty", path.as_ref().display()),
        ));
    }
    // Safety: the file is opened read-only and not modified while the map is alive
    unsafe { Mmap::map(&file) }
}
