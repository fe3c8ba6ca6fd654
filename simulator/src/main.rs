fn main() -> std::io::Result<()> {
    simulator::modules::run()
}
