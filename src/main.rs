fn main() {
    movie_tickets::run();
}
