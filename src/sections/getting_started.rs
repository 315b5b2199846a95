use leptos::prelude::*;

use super::{CodeBlock, SCAFFOLD_COMMAND};

#[component]
pub fn GettingStarted() -> impl IntoView {
    view! {
        <section class="getting-started" id="getting-started">
            <div class="container">
                <h2 class="section-title">"Up and running in five steps"</h2>
                <div class="steps">
                    <Step num="1" title="Create your project">
                        <p>"Run the scaffolder and answer the prompts. It asks for a project name and a language, then writes the whole tree."</p>
                        <CodeBlock title="terminal" code=SCAFFOLD_COMMAND />
                    </Step>
                    <Step num="2" title="Move into it">
                        <p>"Everything lands in a directory named after your project."</p>
                        <CodeBlock title="terminal" code="cd my-app" />
                    </Step>
                    <Step num="3" title="Configure the environment">
                        <p>"Copy the example file and fill in your MongoDB connection string. The server reads both values on boot."</p>
                        <CodeBlock
                            title=".env"
                            code="MONGODB_URI=mongodb://localhost:27017/my-app\nPORT=7000"
                        />
                    </Step>
                    <Step num="4" title="Install and run">
                        <p>
                            "Start the dev server with hot reload. It comes up on "
                            <code class="inline-code">"localhost:7000"</code>
                            " and reconnects to MongoDB automatically."
                        </p>
                        <CodeBlock title="terminal" code="npm install\nnpm run dev" />
                    </Step>
                    <Step num="5" title="Deploy">
                        <p>"The generated "<code class="inline-code">"vercel.json"</code>" already routes every request through the serverless entry point. Either of these ships it:"</p>
                        <ul class="step-list">
                            <li>"Push the repo to GitHub and import it on the platform dashboard."</li>
                            <li>"Or deploy straight from the terminal with "<code class="inline-code">"npx vercel"</code>"."</li>
                        </ul>
                    </Step>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Step(num: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="step">
            <div class="step-number">{num}</div>
            <div class="step-body">
                <h3 class="step-title">{title}</h3>
                {children()}
            </div>
        </div>
    }
}
