fn main() {
    #[cfg(target_arch = "wasm32")]
    ssg_portal_frontend::start();
}
