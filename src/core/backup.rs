use crate::errors::{AppError, AppResult};
use crate::store::ScheduleStore;
use std::fs;
use std::io;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Writes every stored record into a zip archive at `dest`.
    /// Returns the number of archived records.
    pub fn backup(store: &ScheduleStore, dest: &Path) -> AppResult<usize> {
        // 1️⃣ Check storage exists
        if !store.dir().is_dir() {
            return Err(AppError::NotFound(format!(
                "storage directory {}",
                store.dir().display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Compress records
        let records = store.record_paths()?;
        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);

        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for path in &records {
            let Some(name) = path.file_name() else {
                continue;
            };
            zip.start_file(name.to_string_lossy(), options)
                .map_err(io::Error::other)?;

            let mut f = fs::File::open(path)?;
            io::copy(&mut f, &mut zip)?;
        }

        zip.finish().map_err(io::Error::other)?;

        Ok(records.len())
    }
}
