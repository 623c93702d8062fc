//! Static copy for both pages.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Principle {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const CORE_PRINCIPLES: [Principle; 4] = [
    Principle {
        name: "DRY (Don't Repeat Yourself)",
        summary: "Every piece of knowledge must have a single, unambiguous, authoritative representation within a system.",
    },
    Principle {
        name: "SOLID",
        summary: "Five principles of Object-Oriented Design that make software more understandable, flexible, and maintainable.",
    },
    Principle {
        name: "KISS (Keep It Simple, Stupid)",
        summary: "Systems work best when they are kept simple rather than made complex.",
    },
    Principle {
        name: "YAGNI (You Aren't Gonna Need It)",
        summary: "Avoid implementing premature functionality before it's actually required.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipBlock {
    Text(&'static str),
    Code(&'static str),
    /// Before and after, rendered side by side.
    CodePair(&'static str, &'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub blocks: &'static [TipBlock],
}

pub const CLEAN_CODE_TIPS: [Tip; 10] = [
    Tip {
        title: "Meaningful Names",
        blocks: &[
            TipBlock::Text(
                "Use descriptive names for variables, functions, classes, and other identifiers. A well-chosen name can convey the purpose of the entity, making the code more understandable.",
            ),
            TipBlock::Code("# Bad variable name\nx = 5\n\n# Good variable name\ntotal_score = 5"),
        ],
    },
    Tip {
        title: "Consistent Formatting and Indentation",
        blocks: &[
            TipBlock::Text(
                "Adhere to a consistent coding style and indentation. This makes the codebase look clean and organized. Most programming languages have community-accepted coding standards (e.g., PEP 8 for Python, eslint for JavaScript) that you should follow. Consistency also applies to naming conventions, spacing, and code structure.",
            ),
            TipBlock::Code(
                "// Inconsistent formatting\nif(condition){\n    doSomething();\n  } else {\n      doSomethingElse();\n}\n\n// Consistent formatting\nif (condition) {\n    doSomething();\n} else {\n    doSomethingElse();\n}",
            ),
        ],
    },
    Tip {
        title: "DRY (Don't Repeat Yourself) Principle",
        blocks: &[
            TipBlock::Text(
                "Avoid duplicating code. Repeated code is harder to maintain and increases the risk of inconsistencies. Extract common functionality into functions, methods, or classes to promote code reusability.",
            ),
            TipBlock::CodePair(
                "// ❌ Violates DRY\nfunction bookPrice(q, p) {\n    return q * p;\n}\n\nfunction laptopPrice(q, p) {\n    return q * p;\n}\n\nconsole.log(bookPrice(3, 25));\nconsole.log(laptopPrice(2, 800));",
                "// ✅ Follows DRY\nfunction price(q, p) {\n    return q * p;\n}\n\nconsole.log(price(3, 25));  // Book price\nconsole.log(price(2, 800)); // Laptop price",
            ),
        ],
    },
    Tip {
        title: "Single Responsibility",
        blocks: &[TipBlock::Text(
            "Each function or class should have one reason to change. Break complex tasks into smaller, focused pieces of code.",
        )],
    },
    Tip {
        title: "Write Tests",
        blocks: &[
            TipBlock::Text(
                "Write unit tests to verify your code's correctness. Test-driven development (TDD) can help you write cleaner code by forcing you to consider edge cases and expected behavior upfront.",
            ),
            TipBlock::Code(
                "// Example using JavaScript and the Jest testing framework\ntest('addition works correctly', () => {\n    expect(add(2, 3)).toBe(5);\n    expect(add(-1, 1)).toBe(0);\n    expect(add(0, 0)).toBe(0);\n});",
            ),
        ],
    },
    Tip {
        title: "Keep Functions Small",
        blocks: &[
            TipBlock::Text(
                "Functions should do one thing, do it well, and do it only. Aim for functions that are small enough to fit on a screen.",
            ),
            TipBlock::Code(
                "// Long and complex function\nfunction processUserData(user) {\n    // Many lines of code...\n}\n\n// Refactored into smaller functions\nfunction validateUserInput(userInput) {\n    // Validation logic...\n}\n\nfunction saveUserToDatabase(user) {\n    // Database operation...\n}",
            ),
        ],
    },
    Tip {
        title: "Use Version Control Properly",
        blocks: &[TipBlock::Text(
            "Write meaningful commit messages and make small, focused commits. Each commit should represent a single logical change.",
        )],
    },
    Tip {
        title: "Document with Care",
        blocks: &[
            TipBlock::Text(
                "Use comments sparingly, and when you do, make them meaningful. Write documentation that explains \"why\" rather than \"what\". The code should be clear enough to show what it does. Documentation, such as inline comments and README files, helps other developers understand your code's purpose and usage.",
            ),
            TipBlock::CodePair(
                "❌\nx = x + 1  # Increment x",
                "✅\n# Calculate the total score by incrementing x\ntotal_score = x + 1",
            ),
        ],
    },
    Tip {
        title: "Error Handling",
        blocks: &[
            TipBlock::Text(
                "Handle errors gracefully and provide meaningful error messages. Don't swallow exceptions or return null when an error occurs.",
            ),
            TipBlock::CodePair(
                "❌\ntry {\n    result = divide(x, y);\n} catch (error) {\n    console.error(\"An error occurred\");\n}",
                "✅\ntry {\n    result = divide(x, y);\n} catch (error) {\n    console.error(\n        error instanceof ZeroDivisionError ? \"Division by zero:\" :\n        error instanceof ValueError ? \"Invalid input:\" :\n        \"Unexpected error:\",\n        error.message\n    );\n}",
            ),
        ],
    },
    Tip {
        title: "Continuous Refactoring",
        blocks: &[
            TipBlock::Text(
                "Refactor your code regularly. As requirements change and your understanding of the problem domain deepens, adjust your code accordingly. Refactoring helps maintain clean code as the project evolves. Suppose you have a function that calculates the total price of items in a shopping cart with a fixed discount percentage:",
            ),
            TipBlock::Code(
                "function calcTotal(cart) {\n    return cart.reduce((sum, item) => sum + item.price, 0) * 0.9;\n}",
            ),
            TipBlock::Text(
                "Initially, this function calculates the total price and applies a fixed discount of 10%. However, as the project evolves, you realize that you need to support variable discounts. To refactor the code to make it more flexible, you can introduce a discount parameter:",
            ),
            TipBlock::Code(
                "function calcTotal(cart, discount = 10) {\n    if (discount < 0 || discount > 100) throw new Error(\"Invalid discount!\");\n    return cart.reduce((sum, item) => sum + item.price, 0) * (1 - discount / 100);\n}",
            ),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HOME_FAQ: &[FaqItem] = &[
    FaqItem {
        question: "What is clean code?",
        answer: "Clean code is code that is easy to read, understand, and maintain. It follows best practices like meaningful naming, small functions, and proper formatting to ensure clarity and efficiency.",
    },
    FaqItem {
        question: "Why is clean code important?",
        answer: "Clean code reduces technical debt, makes debugging easier, improves collaboration among developers, and ensures long-term scalability.",
    },
];

pub const GUIDE_INTRO_TITLE: &str = "Why Clean Code?";
pub const GUIDE_INTRO: &str = "Writing clean code is an art that transforms complex problems into elegant, maintainable solutions. It's not just about making code work, it's about making code that's easy to understand, modify, and scale. Clean code is the foundation of every successful software project, and it's the key to building maintainable, high-quality applications.";
pub const GUIDE_SIGN_OFF: &str = "Keep your code clean and your brain rot-free!";

pub const HERO_TITLE_LINES: [&str; 2] = ["Guide on", "Clean Code"];
pub const HERO_TAGLINE_LEAD: &str = "The Art of ";
pub const HERO_TAGLINE_EMPHASIS: &str = "Writing Beautiful Software";

pub const CARD_TITLE: &str = "Code Like a Pro";
pub const CARD_BODY: &str = "Write readable, maintainable, and error-free code effortlessly!";
pub const CARD_IMAGE: &str = "https://i.pinimg.com/736x/9e/2c/b3/9e2cb31efaaf32f30d1402529632c7c1.jpg";

pub const WELCOME_BUTTON: &str = "Welcome Heckers!";
pub const WELCOME_POPUP: &str = "Sikee!!";
pub const DECOR_POPUP_BUTTON: &str = "Open Popup";
pub const DECOR_POPUP: &str = "Learn about clean code!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BubbleCopy {
    pub left: &'static str,
    pub right: &'static str,
}

pub const DESKTOP_BUBBLES: BubbleCopy = BubbleCopy {
    left: "Damn!! What a great hackathon!",
    right: "Exactly! Hacknight rocks!",
};

pub const COMPACT_BUBBLES: BubbleCopy = BubbleCopy {
    left: "I'm so obsessed with this library!",
    right: "Mee too!",
};

pub const DESKTOP_PROGRESS_CAPTION: &str = "How good is your code?";
pub const COMPACT_PROGRESS_CAPTION: &str = "How cute are you?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_TITLE: &str = "Welcome to HackNight'25";
pub const NAV_LOGO: &str = "/logo2.png";

pub const NAV_LINKS: [ExternalLink; 2] = [
    ExternalLink {
        label: "Knight's Den",
        href: "https://hacknighthub.vercel.app/",
    },
    ExternalLink {
        label: "HackClub VITC",
        href: "https://www.instagram.com/hackclubvitc/",
    },
];

pub const NEXT_STEPS_LINK: ExternalLink = ExternalLink {
    label: "GitHub repository",
    href: "https://gist.github.com/wojteklu/73c6914cc446146b8b533c0988cf8d29",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tip_has_prose_first() {
        for tip in CLEAN_CODE_TIPS {
            assert!(
                matches!(tip.blocks.first(), Some(TipBlock::Text(_))),
                "{} should open with prose",
                tip.title
            );
        }
    }

    #[test]
    fn external_links_are_absolute_https() {
        for link in NAV_LINKS.iter().chain([&NEXT_STEPS_LINK]) {
            assert!(link.href.starts_with("https://"), "{}", link.label);
        }
    }
}
