mod merge_files;
mod merge_job;
