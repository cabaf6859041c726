fn main() {
    shop_dashboard_pwa::run();
}
