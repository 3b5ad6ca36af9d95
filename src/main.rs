fn main() {
    fpp_model::cli::run();
}
