use std::fs;
use std::path::Path;

// Embeds the trunk output of the frontend. Without a build the checked-in
// placeholder page under static/dist is served instead.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir.join("dist"));
        fs::create_dir_all(out_dir).expect("cannot create backend/static");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .expect("cannot copy frontend/dist into backend/static");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
