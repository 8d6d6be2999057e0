use clap::Parser;
use rspbca::app::BcaApp;

fn main() {
    env_logger::init();
    let args = BcaApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("rspbca failed: {e}");
        std::process::exit(1);
    }
}
