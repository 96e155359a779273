fn main() {
    hj::cli::run();
}
