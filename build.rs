fn main() {
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/folio.ico");
        res.compile().expect("failed to embed windows icon");
    }
}
