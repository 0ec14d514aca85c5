use super::CatalogEntry;
use crate::model::{Card, Deck, DeckKey};

type StaticDeck = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const DECKS: &[StaticDeck] = &[
    (
        "ml",
        "Machine Learning Basics",
        &[
            ("What is supervised learning?", "Learning from labeled data."),
            ("What is unsupervised learning?", "Finding patterns in unlabeled data."),
            ("What is a model?", "A function mapping inputs to outputs."),
            ("What is overfitting?", "Memorizing training data instead of generalizing."),
            ("What is underfitting?", "Being too simple to learn important patterns."),
            ("What is a feature?", "An input variable used for making predictions."),
            ("What is a label?", "The target output."),
            ("What is gradient descent?", "Loss-minimizing optimization."),
            ("What is a neural network?", "Interconnected layers of neurons."),
            ("What is classification?", "Predicting categories."),
        ],
    ),
    (
        "python",
        "Python Fundamentals",
        &[
            ("What is PEP 8?", "Python's style guide."),
            ("What is a list?", "An ordered, mutable collection."),
            ("What keyword defines a function?", "`def`."),
            ("What is a dictionary?", "Key-value mapping."),
            ("What does `len()` return?", "Number of items in a container."),
            ("What is slicing?", "Selecting subsections of sequences."),
            ("What are list comprehensions?", "Concise list-building syntax."),
            ("What does `None` represent?", "Absence of a value."),
            ("What is a virtual environment?", "Isolated Python environment."),
            ("What module handles dates?", "`datetime`."),
        ],
    ),
    (
        "sql",
        "SQL Essentials",
        &[
            ("What does SELECT do?", "Retrieves columns from tables."),
            ("What is a primary key?", "Uniquely identifies a row."),
            ("What clause filters rows?", "`WHERE`."),
            ("What clause groups rows?", "`GROUP BY`."),
            ("What operator matches patterns?", "`LIKE`."),
            ("What does JOIN do?", "Combines rows from tables."),
            ("How do you sort results?", "Use `ORDER BY`."),
            ("What is normalization?", "Organizing data to reduce redundancy."),
            ("What is a foreign key?", "References a primary key in another table."),
            ("What command inserts data?", "`INSERT INTO`."),
        ],
    ),
    (
        "math",
        "Math Refresher",
        &[
            ("What is the derivative of x²?", "2x."),
            ("Define a vector.", "A quantity with magnitude and direction."),
            ("What is π approximately?", "3.14159."),
            ("What is the Pythagorean theorem?", "a² + b² = c²."),
            ("What is a matrix?", "Rectangular array of numbers."),
            ("What is an integral?", "Area under a curve."),
            ("What is factorial 5?", "120."),
            ("What is a prime number?", "Integer >1 divisible only by 1 and itself."),
            ("What is logarithm base 10 of 100?", "2."),
            ("What is standard deviation?", "Measure of spread from mean."),
        ],
    ),
];

pub(super) fn entries() -> Vec<CatalogEntry> {
    DECKS
        .iter()
        .map(|&(key, title, cards)| CatalogEntry {
            key: DeckKey::from_static(key),
            deck: Deck::from_static(
                title,
                cards
                    .iter()
                    .map(|&(question, answer)| Card::from_static(question, answer))
                    .collect(),
            ),
        })
        .collect()
}
